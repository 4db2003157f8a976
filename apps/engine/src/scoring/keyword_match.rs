//! Keyword matching scorer (weight 40) — how much of the JD's keyword set
//! the resume covers.

use std::collections::HashSet;

use crate::config::ExtractionParams;
use crate::report::KeywordMatchDetails;
use crate::scoring::round2;
use crate::text::{extract_keywords, normalize};

pub const MAX_SCORE: f64 = 40.0;

/// Scores the resume's coverage of the JD keyword set.
///
/// The JD contributes its top keywords (frequency-ranked, capped); the resume
/// contributes its full distinct token set — no frequency, no cap. Matching
/// is exact surface form: "developing" never matches "developed".
pub fn score_keyword_matching(resume_text: &str, jd_text: &str) -> (f64, KeywordMatchDetails) {
    let params = ExtractionParams::default();
    let jd_keywords: HashSet<String> =
        extract_keywords(jd_text, params.min_token_len, params.max_keywords)
            .into_iter()
            .collect();

    let resume_normalized = normalize(resume_text);
    let resume_words: HashSet<&str> = resume_normalized.split_whitespace().collect();

    let mut matched: Vec<String> = Vec::new();
    let mut missing: Vec<String> = Vec::new();
    for keyword in &jd_keywords {
        if resume_words.contains(keyword.as_str()) {
            matched.push(keyword.clone());
        } else {
            missing.push(keyword.clone());
        }
    }
    matched.sort();
    missing.sort();

    // Floor to 1 so a keyword-less JD scores 0 instead of dividing by zero.
    let total_jd_keywords = jd_keywords.len().max(1);
    let match_ratio = matched.len() as f64 / total_jd_keywords as f64;
    let score = match_ratio * MAX_SCORE;

    let details = KeywordMatchDetails {
        matched_count: matched.len(),
        match_percentage: round2(match_ratio * 100.0),
        total_jd_keywords,
        matched_keywords: matched,
        missing_keywords: missing,
    };
    (score, details)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_coverage_scores_max() {
        let jd = "rust engineer building rust services kubernetes";
        let resume = "senior rust engineer, kubernetes services, building platforms";
        let (score, details) = score_keyword_matching(resume, jd);
        assert!(
            (score - MAX_SCORE).abs() < f64::EPSILON,
            "all JD keywords present, got {score}"
        );
        assert!(details.missing_keywords.is_empty());
        assert_eq!(details.match_percentage, 100.0);
    }

    #[test]
    fn test_partial_coverage_is_proportional() {
        // JD keywords (min length 3): python, developer, needed
        let (score, details) = score_keyword_matching("john doe python developer", "python developer needed");
        assert_eq!(details.total_jd_keywords, 3);
        assert_eq!(details.matched_count, 2);
        assert!((score - 2.0 / 3.0 * MAX_SCORE).abs() < 1e-9, "got {score}");
        assert_eq!(details.missing_keywords, vec!["needed"]);
    }

    #[test]
    fn test_empty_jd_scores_zero_with_floored_total() {
        let (score, details) = score_keyword_matching("some resume text", "");
        assert_eq!(score, 0.0);
        assert_eq!(details.matched_count, 0);
        assert_eq!(details.total_jd_keywords, 1, "divisor floored to 1");
        assert_eq!(details.match_percentage, 0.0);
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let (score, details) = score_keyword_matching("", "rust rust kubernetes");
        assert_eq!(score, 0.0);
        assert_eq!(details.matched_count, 0);
        assert_eq!(details.missing_keywords.len(), 2);
    }

    #[test]
    fn test_keyword_lists_sorted_lexicographically() {
        let (_, details) = score_keyword_matching(
            "zookeeper airflow",
            "zookeeper airflow terraform ansible",
        );
        let mut matched_sorted = details.matched_keywords.clone();
        matched_sorted.sort();
        assert_eq!(details.matched_keywords, matched_sorted);
        let mut missing_sorted = details.missing_keywords.clone();
        missing_sorted.sort();
        assert_eq!(details.missing_keywords, missing_sorted);
    }

    #[test]
    fn test_casing_variants_match_through_normalization() {
        let (score, _) = score_keyword_matching("PYTHON", "python python python");
        assert!((score - MAX_SCORE).abs() < f64::EPSILON);
    }
}
