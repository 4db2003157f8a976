//! Section detection scorer (weight 20) — presence of the five standard
//! resume sections.

use crate::lexicon::{section_patterns, SECTION_NAMES};
use crate::report::{SectionDetails, SectionFlags};

pub const MAX_SCORE: f64 = 20.0;
pub const POINTS_PER_SECTION: f64 = 4.0;

/// Detects the five standard sections in the lowercased raw resume text.
///
/// Detection is independent per section; overlapping matches are fine and a
/// section counts at most once. Runs on the raw text (lowercased only) so
/// headers with punctuation still match.
pub fn score_resume_sections(resume_text: &str) -> (f64, SectionDetails) {
    let lowered = resume_text.to_lowercase();
    let patterns = section_patterns();

    let flags = SectionFlags {
        summary: patterns.summary.is_match(&lowered),
        skills: patterns.skills.is_match(&lowered),
        experience: patterns.experience.is_match(&lowered),
        education: patterns.education.is_match(&lowered),
        projects: patterns.projects.is_match(&lowered),
    };

    let detected_count = flags.detected_count();
    let score = detected_count as f64 * POINTS_PER_SECTION;

    let details = SectionDetails {
        sections_detected: flags,
        detected_count,
        total_sections: SECTION_NAMES.len(),
        score_per_section: POINTS_PER_SECTION,
    };
    (score, details)
}
