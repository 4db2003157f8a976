//! Action-verb density scorer (weight 10) — occurrence count of strong
//! action verbs in the resume.

use crate::lexicon::ACTION_VERB_SET;
use crate::report::ActionVerbDetails;

pub const MAX_SCORE: f64 = 10.0;

/// Occurrence count at which the ramp switches from the steep segment to the
/// diminishing-returns segment.
const FULL_CREDIT_COUNT: usize = 5;
/// Score earned at exactly `FULL_CREDIT_COUNT` occurrences.
const BASE_SCORE: f64 = 6.0;
/// Additional occurrences needed per extra point past the base.
const OCCURRENCES_PER_POINT: f64 = 10.0;

const BENCHMARK: &str = "5-10+ strong action verbs for a competitive resume";

/// Counts lexicon verbs in the normalized resume — a verb occurring N times
/// counts N times (density, not distinct-verb count) — and maps the count
/// through a two-segment ramp:
///
/// - below 5 occurrences: linear from 0 to 6
/// - 5 and above: 6 plus a tenth of a point per extra occurrence, capped
///   at 10
///
/// The cap is only reached past 45 occurrences. That soft ceiling is
/// intentional diminishing-returns shaping, not a bug.
pub fn score_action_verbs(resume_text: &str) -> (f64, ActionVerbDetails) {
    let normalized = crate::text::normalize(resume_text);
    let verbs_found: Vec<String> = normalized
        .split_whitespace()
        .filter(|token| ACTION_VERB_SET.contains(*token))
        .map(str::to_owned)
        .collect();
    let action_verb_count = verbs_found.len();

    let score = if action_verb_count < FULL_CREDIT_COUNT {
        (action_verb_count as f64 / FULL_CREDIT_COUNT as f64) * BASE_SCORE
    } else {
        (BASE_SCORE
            + (action_verb_count - FULL_CREDIT_COUNT) as f64 / OCCURRENCES_PER_POINT)
            .min(MAX_SCORE)
    };

    let details = ActionVerbDetails {
        action_verb_count,
        verbs_found,
        benchmark: BENCHMARK.to_string(),
    };
    (score, details)
}
