//! Keyword extraction — frequency-ranked distinct tokens from arbitrary text.

use std::collections::HashMap;

use crate::text::normalize;

/// Extracts the top `max_count` keywords from `text` by descending frequency.
///
/// Tokens come from the normalized text split on whitespace; tokens shorter
/// than `min_length` characters are discarded. Ties are broken by first-seen
/// order: counting preserves first-occurrence order and the ranking sort is
/// stable, so equal-frequency tokens keep their original relative order. No
/// stemming — pure surface-form frequency.
pub fn extract_keywords(text: &str, min_length: usize, max_count: usize) -> Vec<String> {
    let normalized = normalize(text);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for token in normalized.split_whitespace() {
        if token.chars().count() < min_length {
            continue;
        }
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            first_seen.push(token);
        }
        *count += 1;
    }

    let mut ranked = first_seen;
    ranked.sort_by_key(|token| std::cmp::Reverse(counts[token]));

    ranked
        .into_iter()
        .take(max_count)
        .map(str::to_owned)
        .collect()
}
