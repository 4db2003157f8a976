//! ATS scoring engine.
//!
//! Given free-text resume content and a free-text job description, produces
//! a deterministic 0–100 compatibility score decomposed into five weighted
//! components (keyword matching 40, section detection 20, formatting 10,
//! action verbs 10, semantic similarity 10), plus ordered improvement
//! suggestions.
//!
//! The engine is a pure library: callers supply already-extracted text
//! (document parsing, the job-category classifier, and presentation are
//! external collaborators) and receive plain data structures back. Two entry
//! points:
//!
//! ```
//! use ats_engine::{calculate_ats_score, generate_improvement_suggestions, DEFAULT_SCORE_THRESHOLD};
//!
//! let report = calculate_ats_score("resume text...", "job description...");
//! let suggestions = generate_improvement_suggestions(&report, DEFAULT_SCORE_THRESHOLD);
//! assert!((0.0..=100.0).contains(&report.final_score));
//! assert!(!suggestions.is_empty());
//! ```

pub mod config;
pub mod engine;
pub mod errors;
pub mod lexicon;
pub mod report;
pub mod scoring;
pub mod suggestions;
pub mod text;

pub use config::{ExtractionParams, SuggestionThresholds, DEFAULT_SCORE_THRESHOLD};
pub use engine::calculate_ats_score;
pub use report::{AtsReport, Component, Components};
pub use suggestions::generate_improvement_suggestions;
