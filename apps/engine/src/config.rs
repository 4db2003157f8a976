use serde::{Deserialize, Serialize};

/// Default overall-score threshold below which the summary suggestion fires.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 75.0;

/// Per-component score thresholds driving the suggestion rules. Fixed
/// empirical constants — preserved exactly, not derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionThresholds {
    pub keyword: f64,
    pub sections: f64,
    pub action_verbs: f64,
    pub semantic: f64,
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            keyword: 20.0,
            sections: 20.0,
            action_verbs: 6.0,
            semantic: 5.0,
        }
    }
}

/// Keyword extraction parameters used by the keyword matching scorer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExtractionParams {
    /// Minimum token length, in characters.
    pub min_token_len: usize,
    /// Maximum number of keywords retained.
    pub max_keywords: usize,
}

impl Default for ExtractionParams {
    fn default() -> Self {
        Self {
            min_token_len: 3,
            max_keywords: 40,
        }
    }
}
