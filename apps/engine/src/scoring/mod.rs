// The five component scorers. Each is a pure function of its text inputs
// returning a bounded sub-score plus a typed details record; no scorer shares
// state with another.

pub mod action_verbs;
pub mod formatting;
pub mod keyword_match;
pub mod sections;
pub mod semantic;

/// Rounds to 2 decimal places, the precision of reported scores.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to 4 decimal places, the precision of reported raw similarities.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(26.666_666), 26.67);
        assert_eq!(round2(0.005), 0.01);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123_456), 0.1235);
    }
}
