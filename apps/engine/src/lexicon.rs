//! Static lexicons backing the scorers: the strong-action-verb table, the
//! resume section patterns, and the stop-word list used by the semantic
//! vectorizer.
//!
//! These tables are versioned data, not tunables — the scoring arithmetic
//! depends on their exact membership, so they live here where they can be
//! unit-tested independently of the scorers.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

// ────────────────────────────────────────────────────────────────────────────
// Strong action verbs
// ────────────────────────────────────────────────────────────────────────────

/// Verbs that signal impactful, ownership-level experience. Surface forms
/// only — "developing" does not match "developed".
pub const STRONG_ACTION_VERBS: &[&str] = &[
    "built",
    "developed",
    "created",
    "designed",
    "engineered",
    "architected",
    "optimized",
    "improved",
    "enhanced",
    "accelerated",
    "automated",
    "streamlined",
    "led",
    "managed",
    "coordinated",
    "orchestrated",
    "directed",
    "supervised",
    "achieved",
    "accomplished",
    "delivered",
    "executed",
    "implemented",
    "launched",
    "spearheaded",
    "pioneered",
    "transformed",
    "revolutionized",
    "innovated",
    "analyzed",
    "identified",
    "discovered",
    "resolved",
    "solved",
    "troubleshot",
    "increased",
    "decreased",
    "reduced",
    "maximized",
    "minimized",
    "scaled",
    "integrated",
    "consolidated",
    "merged",
    "combined",
    "unified",
    "aligned",
    "awarded",
    "recognized",
    "certified",
    "promoted",
    "selected",
    "chosen",
];

/// Set view of [`STRONG_ACTION_VERBS`] for O(1) membership checks.
pub static ACTION_VERB_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STRONG_ACTION_VERBS.iter().copied().collect());

// ────────────────────────────────────────────────────────────────────────────
// Resume section patterns
// ────────────────────────────────────────────────────────────────────────────

/// Section names in catalog order. This order is the canonical output order
/// for per-section detail reporting.
pub const SECTION_NAMES: [&str; 5] = ["summary", "skills", "experience", "education", "projects"];

static SUMMARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(summary|objective|profile|about)\b").unwrap());
static SKILLS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(skills|technical skills|competencies|expertise)\b").unwrap());
static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(experience|work experience|professional experience|employment)\b").unwrap()
});
static EDUCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(education|academic|degree|certification|bachelors|masters|phd|b\.s|b\.a|m\.s|m\.a)\b")
        .unwrap()
});
static PROJECTS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(projects|portfolio|personal projects|key projects)\b").unwrap());

/// Word-boundary alternation patterns for the five resume sections, matched
/// against the lowercased raw resume text.
pub struct SectionPatterns {
    pub summary: &'static Regex,
    pub skills: &'static Regex,
    pub experience: &'static Regex,
    pub education: &'static Regex,
    pub projects: &'static Regex,
}

pub fn section_patterns() -> SectionPatterns {
    SectionPatterns {
        summary: &SUMMARY_RE,
        skills: &SKILLS_RE,
        experience: &EXPERIENCE_RE,
        education: &EDUCATION_RE,
        projects: &PROJECTS_RE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Stop words
// ────────────────────────────────────────────────────────────────────────────

/// Common English stop words excluded from the semantic term space.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "i", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor",
    "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "out", "over", "own",
    "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "them", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "would", "you", "your",
];

/// Set view of [`STOP_WORDS`].
pub static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());
