//! Formatting heuristics scorer (weight 10) — ordered penalty/bonus rules
//! over the raw, unnormalized resume text.

use crate::report::FormattingDetails;
use crate::scoring::round4;

pub const MAX_SCORE: f64 = 10.0;

/// Word-count band outside which the length penalty applies. Empirical
/// constants preserved exactly.
pub(crate) const WORD_FLOOR: usize = 100;
const WORD_CEILING: usize = 2000;
const LENGTH_PENALTY: f64 = 3.0;

const SPECIAL_CHAR_LIMIT: f64 = 0.15;
const SPECIAL_CHAR_PENALTY: f64 = 2.0;

const MIN_BULLETS_FOR_BONUS: usize = 5;
const BULLET_BONUS: f64 = 2.0;

/// Applies the formatting rules in order, starting from the full 10 points.
/// The word-count penalties are mutually exclusive by construction. The final
/// score is clamped to [0, 10].
pub fn score_formatting(resume_text: &str) -> (f64, FormattingDetails) {
    let mut score = MAX_SCORE;
    let mut penalties = Vec::new();
    let mut bonuses = Vec::new();

    let word_count = resume_text.split_whitespace().count();
    if word_count < WORD_FLOOR {
        score -= LENGTH_PENALTY;
        penalties.push(format!("Too few words ({word_count}): -{LENGTH_PENALTY:.0}pts"));
    } else if word_count > WORD_CEILING {
        score -= LENGTH_PENALTY;
        penalties.push(format!("Too many words ({word_count}): -{LENGTH_PENALTY:.0}pts"));
    }

    let total_chars = resume_text.chars().count();
    let special_chars = resume_text.chars().filter(|c| is_scored_special(*c)).count();
    let special_char_ratio = if total_chars == 0 {
        0.0
    } else {
        special_chars as f64 / total_chars as f64
    };
    if special_char_ratio > SPECIAL_CHAR_LIMIT {
        score -= SPECIAL_CHAR_PENALTY;
        penalties.push(format!(
            "Excessive special characters ({:.2}%): -{SPECIAL_CHAR_PENALTY:.0}pts",
            special_char_ratio * 100.0
        ));
    }

    let bullet_point_count = count_bullet_lines(resume_text);
    if bullet_point_count >= MIN_BULLETS_FOR_BONUS {
        score += BULLET_BONUS;
        bonuses.push(format!(
            "Good use of bullet points ({bullet_point_count}): +{BULLET_BONUS:.0}pts"
        ));
    }

    let details = FormattingDetails {
        word_count,
        special_char_ratio: round4(special_char_ratio),
        bullet_point_count,
        penalties,
        bonuses,
    };
    (score.clamp(0.0, MAX_SCORE), details)
}

/// Punctuation counted toward the special-character ratio. Periods, hyphens,
/// and commas are ordinary resume text.
fn is_scored_special(c: char) -> bool {
    c.is_ascii_punctuation() && !matches!(c, '.' | '-' | ',')
}

/// Counts lines whose first non-whitespace character is a bullet marker
/// followed by whitespace.
fn count_bullet_lines(text: &str) -> usize {
    text.lines()
        .filter(|line| {
            let mut chars = line.trim_start().chars();
            matches!(chars.next(), Some('-' | '*' | '•'))
                && matches!(chars.next(), Some(c) if c.is_whitespace())
        })
        .count()
}
