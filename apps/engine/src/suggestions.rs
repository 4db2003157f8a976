//! Improvement suggestions — ordered, conditional advice derived from a
//! scored report.

use crate::config::SuggestionThresholds;
use crate::report::AtsReport;
use crate::scoring::formatting::WORD_FLOOR;

/// How many missing keywords the keyword suggestion names at most.
const MISSING_KEYWORD_PREVIEW: usize = 10;

/// Generates improvement suggestions from a scored report.
///
/// Each rule is evaluated independently; all applicable rules fire and append
/// in fixed order (keywords, sections, formatting penalties, word count,
/// action verbs, semantic, overall). The word-count rule intentionally
/// duplicates the formatting penalty line. When no rule fires, the single
/// "great score" message is returned. `threshold` is the overall-score bar
/// for the summary rule; see [`crate::config::DEFAULT_SCORE_THRESHOLD`].
pub fn generate_improvement_suggestions(report: &AtsReport, threshold: f64) -> Vec<String> {
    let thresholds = SuggestionThresholds::default();
    let components = &report.components;
    let mut suggestions = Vec::new();

    let keyword = &components.keyword_matching;
    if keyword.score < thresholds.keyword && !keyword.details.missing_keywords.is_empty() {
        let preview: Vec<&str> = keyword
            .details
            .missing_keywords
            .iter()
            .take(MISSING_KEYWORD_PREVIEW)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Add missing keywords: {}. These terms are in the job description but not in your resume.",
            preview.join(", ")
        ));
    }

    let sections = &components.resume_sections;
    let missing_sections = sections.details.sections_detected.missing();
    if sections.score < thresholds.sections && !missing_sections.is_empty() {
        suggestions.push(format!(
            "Add missing sections: {}. These are crucial for ATS parsing.",
            missing_sections.join(", ")
        ));
    }

    for penalty in &components.formatting_heuristics.details.penalties {
        suggestions.push(penalty.clone());
    }

    let word_count = components.formatting_heuristics.details.word_count;
    if word_count < WORD_FLOOR {
        suggestions.push(format!(
            "Expand your resume content. Current: {word_count} words. Target: 150-400 words per section."
        ));
    }

    let verbs = &components.action_verbs;
    if verbs.score < thresholds.action_verbs {
        suggestions.push(format!(
            "Use stronger action verbs. Current count: {}. Example verbs: developed, optimized, architected, led, accelerated.",
            verbs.details.action_verb_count
        ));
    }

    if components.semantic_similarity.score < thresholds.semantic {
        suggestions.push(
            "Low semantic match with the job description. Incorporate more role-specific \
             terminology and technical context from the posting."
                .to_string(),
        );
    }

    if report.final_score < threshold {
        suggestions.push(format!(
            "Overall ATS score: {}/100. Focus on the areas above to improve the match with this job description.",
            report.final_score
        ));
    }

    if suggestions.is_empty() {
        suggestions.push(format!(
            "Great ATS score: {}/100! Your resume is well-optimized for this job description.",
            report.final_score
        ));
    }
    suggestions
}
