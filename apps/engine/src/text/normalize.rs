//! Text normalization — canonicalizes raw resume/JD text into a
//! token-friendly form.
//!
//! Steps, in order, each idempotent: lowercase; strip URL-like and email-like
//! substrings; strip punctuation except hyphen and period; collapse
//! whitespace; trim.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+|www\S+").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").unwrap());
// ASCII punctuation minus hyphen and period.
static PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"[!"#$%&'()*+,/:;<=>?@\[\\\]^_`{|}~]"##).unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Canonicalizes `text` for tokenization. Total over all inputs — an empty
/// string normalizes to an empty string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let no_urls = URL_RE.replace_all(&lowered, "");
    let no_emails = EMAIL_RE.replace_all(&no_urls, "");
    let no_punct = PUNCT_RE.replace_all(&no_emails, "");
    let collapsed = WHITESPACE_RE.replace_all(&no_punct, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_text() {
        assert_eq!(normalize("Python Developer"), "python developer");
    }

    #[test]
    fn test_strips_urls() {
        assert_eq!(
            normalize("see https://example.com/profile and www.example.com now"),
            "see and now"
        );
    }

    #[test]
    fn test_strips_emails() {
        assert_eq!(normalize("contact john.doe@email.com today"), "contact today");
    }

    #[test]
    fn test_keeps_hyphen_and_period() {
        assert_eq!(
            normalize("self-starter with 3.5 years (remote)!"),
            "self-starter with 3.5 years remote"
        );
    }

    #[test]
    fn test_collapses_whitespace_and_trims() {
        assert_eq!(normalize("  a\t\tb\n\nc  "), "a b c");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("Led Team: built 5+ APIs @ Tech-Corp (2021)");
        let twice = normalize(&once);
        assert_eq!(once, twice, "normalize must be idempotent");
    }
}
