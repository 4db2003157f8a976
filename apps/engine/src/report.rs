//! Report data models — the structured output of a scoring call.
//!
//! Field order in these structs is the canonical output order; serializing an
//! [`AtsReport`] yields the component map keyed by fixed component names in
//! fixed order.

use serde::{Deserialize, Serialize};

use crate::lexicon::SECTION_NAMES;

/// Full result of one scoring call.
///
/// Invariant: `final_score` is the clamped, 2-decimal-rounded sum of the five
/// component scores, and every component score stays within its declared
/// maximum (40/20/10/10/10).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub final_score: f64,
    pub components: Components,
}

/// The five weighted components, in fixed rubric order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Components {
    pub keyword_matching: Component<KeywordMatchDetails>,
    pub resume_sections: Component<SectionDetails>,
    pub formatting_heuristics: Component<FormattingDetails>,
    pub action_verbs: Component<ActionVerbDetails>,
    pub semantic_similarity: Component<SemanticDetails>,
}

/// One weighted sub-score plus its details record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component<D> {
    pub score: f64,
    pub weight: String,
    pub details: D,
}

/// Breakdown of the keyword matching component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatchDetails {
    /// JD keywords found in the resume, sorted lexicographically.
    pub matched_keywords: Vec<String>,
    /// JD keywords absent from the resume, sorted lexicographically.
    pub missing_keywords: Vec<String>,
    /// Floored to 1 when the JD produced no keywords.
    pub total_jd_keywords: usize,
    pub matched_count: usize,
    /// Match ratio as a percentage, rounded to 2 decimals.
    pub match_percentage: f64,
}

/// Per-section detection flags in catalog order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SectionFlags {
    pub summary: bool,
    pub skills: bool,
    pub experience: bool,
    pub education: bool,
    pub projects: bool,
}

impl SectionFlags {
    fn as_array(&self) -> [bool; 5] {
        [
            self.summary,
            self.skills,
            self.experience,
            self.education,
            self.projects,
        ]
    }

    pub fn detected_count(&self) -> usize {
        self.as_array().iter().filter(|found| **found).count()
    }

    /// Names of undetected sections, in catalog order.
    pub fn missing(&self) -> Vec<&'static str> {
        SECTION_NAMES
            .iter()
            .zip(self.as_array())
            .filter(|(_, found)| !found)
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Breakdown of the section detection component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDetails {
    pub sections_detected: SectionFlags,
    pub detected_count: usize,
    pub total_sections: usize,
    pub score_per_section: f64,
}

/// Breakdown of the formatting heuristics component. Each applied rule is
/// recorded as a human-readable string with its exact point delta, in
/// application order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingDetails {
    pub word_count: usize,
    /// Rounded to 4 decimals.
    pub special_char_ratio: f64,
    pub bullet_point_count: usize,
    pub penalties: Vec<String>,
    pub bonuses: Vec<String>,
}

/// Breakdown of the action-verb density component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionVerbDetails {
    /// Occurrence count — a verb appearing N times counts N times.
    pub action_verb_count: usize,
    /// Matched verb tokens including duplicates, in document order.
    pub verbs_found: Vec<String>,
    pub benchmark: String,
}

/// Breakdown of the semantic similarity component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticDetails {
    /// Raw similarity in [0, 1], rounded to 4 decimals.
    pub similarity_score: f64,
    /// The method actually used for this call.
    pub method: String,
    pub interpretation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_flags_detected_count() {
        let flags = SectionFlags {
            summary: true,
            skills: true,
            experience: false,
            education: true,
            projects: false,
        };
        assert_eq!(flags.detected_count(), 3);
    }

    #[test]
    fn test_section_flags_missing_in_catalog_order() {
        let flags = SectionFlags {
            summary: false,
            skills: true,
            experience: false,
            education: true,
            projects: false,
        };
        assert_eq!(flags.missing(), vec!["summary", "experience", "projects"]);
    }

    #[test]
    fn test_components_serialize_in_rubric_order() {
        let json = serde_json::to_string(&SectionFlags::default()).unwrap();
        let summary_pos = json.find("summary").unwrap();
        let projects_pos = json.find("projects").unwrap();
        assert!(
            summary_pos < projects_pos,
            "field order must follow the catalog"
        );
    }
}
