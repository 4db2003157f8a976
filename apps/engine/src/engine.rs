//! Score aggregation — runs the five component scorers and assembles the
//! final report.

use tracing::debug;

use crate::report::{AtsReport, Component, Components};
use crate::scoring::{
    action_verbs::score_action_verbs, formatting::score_formatting,
    keyword_match::score_keyword_matching, round2, sections::score_resume_sections,
    semantic::score_semantic_similarity,
};

/// Calculates the 0–100 ATS compatibility score for one resume against one
/// JD, decomposed into the five weighted components.
///
/// The scorers are independent pure functions; they run in fixed rubric
/// order (keyword, sections, formatting, action verbs, semantic) so fixtures
/// reproduce bit-identically. Each scorer enforces its own bound, making the
/// final clamp a safety net rather than a normal path. Every call is
/// independent — identical inputs always yield an identical report.
pub fn calculate_ats_score(resume_text: &str, jd_text: &str) -> AtsReport {
    let (keyword_score, keyword_details) = score_keyword_matching(resume_text, jd_text);
    let (section_score, section_details) = score_resume_sections(resume_text);
    let (formatting_score, formatting_details) = score_formatting(resume_text);
    let (verb_score, verb_details) = score_action_verbs(resume_text);
    let (semantic_score, semantic_details) = score_semantic_similarity(resume_text, jd_text);

    let final_score = (keyword_score
        + section_score
        + formatting_score
        + verb_score
        + semantic_score)
        .clamp(0.0, 100.0);

    debug!(final_score, "ats score computed");

    AtsReport {
        final_score: round2(final_score),
        components: Components {
            keyword_matching: Component {
                score: round2(keyword_score),
                weight: "40%".to_string(),
                details: keyword_details,
            },
            resume_sections: Component {
                score: round2(section_score),
                weight: "20%".to_string(),
                details: section_details,
            },
            formatting_heuristics: Component {
                score: round2(formatting_score),
                weight: "10%".to_string(),
                details: formatting_details,
            },
            action_verbs: Component {
                score: round2(verb_score),
                weight: "10%".to_string(),
                details: verb_details,
            },
            semantic_similarity: Component {
                score: round2(semantic_score),
                weight: "10%".to_string(),
                details: semantic_details,
            },
        },
    }
}
