//! Semantic similarity scorer (weight 10) — tf-idf cosine similarity between
//! the resume and the JD, with a word-overlap fallback.
//!
//! The primary path fits a small bag-of-terms vector space jointly over the
//! two normalized documents. Its single failure condition — an empty
//! vocabulary — is enumerated in [`VectorizeError`] and redirects to the
//! fallback; the error never reaches the caller.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::errors::VectorizeError;
use crate::lexicon::STOP_WORD_SET;
use crate::report::SemanticDetails;
use crate::scoring::round4;
use crate::text::normalize;

pub const MAX_SCORE: f64 = 10.0;

/// Vocabulary cap: top terms by document frequency, ties lexicographic.
const MAX_VOCAB_TERMS: usize = 100;
/// The joint corpus is always exactly the two documents.
const DOC_COUNT: f64 = 2.0;
/// Minimum unigram length, in characters.
const MIN_TERM_LEN: usize = 2;

const METHOD_TFIDF: &str = "TF-IDF Cosine Similarity";
const METHOD_OVERLAP: &str = "Word Overlap Fallback";

/// Scores how close the resume's vocabulary is to the JD's.
pub fn score_semantic_similarity(resume_text: &str, jd_text: &str) -> (f64, SemanticDetails) {
    let resume_normalized = normalize(resume_text);
    let jd_normalized = normalize(jd_text);

    match tfidf_cosine(&resume_normalized, &jd_normalized) {
        Ok(similarity) => (similarity * MAX_SCORE, details(similarity, METHOD_TFIDF)),
        Err(err) => {
            debug!(%err, "tf-idf vectorization failed, using word-overlap fallback");
            let similarity = word_overlap_similarity(&resume_normalized, &jd_normalized);
            let score = (similarity * MAX_SCORE).min(MAX_SCORE);
            (score, details(similarity, METHOD_OVERLAP))
        }
    }
}

fn details(similarity: f64, method: &str) -> SemanticDetails {
    SemanticDetails {
        similarity_score: round4(similarity),
        method: method.to_string(),
        interpretation: format!("{:.1}% semantic overlap", similarity * 100.0),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Primary path: tf-idf cosine
// ────────────────────────────────────────────────────────────────────────────

fn tfidf_cosine(resume_normalized: &str, jd_normalized: &str) -> Result<f64, VectorizeError> {
    let docs = [term_sequence(resume_normalized), term_sequence(jd_normalized)];
    let vocabulary = build_vocabulary(&docs)?;
    let resume_vector = tfidf_vector(&docs[0], &vocabulary);
    let jd_vector = tfidf_vector(&docs[1], &vocabulary);

    // Vectors are l2-normalized, so the dot product is the cosine. A zero
    // vector (one document contributed no vocabulary terms) yields 0.0.
    let similarity: f64 = resume_vector
        .iter()
        .zip(&jd_vector)
        .map(|(a, b)| a * b)
        .sum();
    Ok(similarity.clamp(0.0, 1.0))
}

/// Terms of one document: unigrams of at least [`MIN_TERM_LEN`] characters
/// with stop words removed, plus bigrams of adjacent surviving unigrams.
fn term_sequence(normalized: &str) -> Vec<String> {
    let unigrams: Vec<&str> = normalized
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TERM_LEN)
        .filter(|token| !STOP_WORD_SET.contains(*token))
        .collect();

    let mut terms: Vec<String> = unigrams.iter().map(|t| (*t).to_owned()).collect();
    terms.extend(unigrams.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    terms
}

/// Builds the joint vocabulary: top [`MAX_VOCAB_TERMS`] terms ranked by
/// document frequency descending, ties broken lexicographically so the space
/// is deterministic. Each entry carries its document frequency for idf.
fn build_vocabulary(docs: &[Vec<String>; 2]) -> Result<Vec<(String, usize)>, VectorizeError> {
    let mut doc_frequency: HashMap<&str, usize> = HashMap::new();
    for doc in docs {
        let distinct: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in distinct {
            *doc_frequency.entry(term).or_insert(0) += 1;
        }
    }
    if doc_frequency.is_empty() {
        return Err(VectorizeError::EmptyVocabulary);
    }

    let mut ranked: Vec<(&str, usize)> = doc_frequency.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    Ok(ranked
        .into_iter()
        .take(MAX_VOCAB_TERMS)
        .map(|(term, df)| (term.to_owned(), df))
        .collect())
}

/// l2-normalized tf-idf vector of one document over the joint vocabulary,
/// with smoothed idf: `ln((1 + n) / (1 + df)) + 1`.
fn tfidf_vector(doc: &[String], vocabulary: &[(String, usize)]) -> Vec<f64> {
    let mut term_counts: HashMap<&str, usize> = HashMap::new();
    for term in doc {
        *term_counts.entry(term.as_str()).or_insert(0) += 1;
    }

    let mut vector: Vec<f64> = vocabulary
        .iter()
        .map(|(term, df)| {
            let tf = term_counts.get(term.as_str()).copied().unwrap_or(0) as f64;
            let idf = ((1.0 + DOC_COUNT) / (1.0 + *df as f64)).ln() + 1.0;
            tf * idf
        })
        .collect();

    let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in &mut vector {
            *weight /= norm;
        }
    }
    vector
}

// ────────────────────────────────────────────────────────────────────────────
// Fallback: word overlap
// ────────────────────────────────────────────────────────────────────────────

/// `|resume_words ∩ jd_words| / |jd_words|` over normalized word sets; 0 when
/// the JD word set is empty.
fn word_overlap_similarity(resume_normalized: &str, jd_normalized: &str) -> f64 {
    let resume_words: HashSet<&str> = resume_normalized.split_whitespace().collect();
    let jd_words: HashSet<&str> = jd_normalized.split_whitespace().collect();
    if jd_words.is_empty() {
        return 0.0;
    }
    resume_words.intersection(&jd_words).count() as f64 / jd_words.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_full() {
        let text = "senior rust engineer building distributed data pipelines";
        let (score, details) = score_semantic_similarity(text, text);
        assert!(
            (details.similarity_score - 1.0).abs() < 1e-9,
            "identical documents must have similarity 1.0, got {}",
            details.similarity_score
        );
        assert!((score - MAX_SCORE).abs() < 1e-9);
        assert_eq!(details.method, METHOD_TFIDF);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        let (score, details) = score_semantic_similarity(
            "gardening cooking painting",
            "kubernetes terraform prometheus",
        );
        assert_eq!(details.similarity_score, 0.0);
        assert_eq!(score, 0.0);
        assert_eq!(details.method, METHOD_TFIDF);
    }

    #[test]
    fn test_partial_overlap_is_between_zero_and_one() {
        let (score, details) = score_semantic_similarity(
            "rust engineer data pipelines",
            "rust engineer cloud platforms",
        );
        assert!(
            details.similarity_score > 0.0 && details.similarity_score < 1.0,
            "got {}",
            details.similarity_score
        );
        assert!(score > 0.0 && score < MAX_SCORE);
    }

    #[test]
    fn test_empty_inputs_fall_back_to_word_overlap() {
        let (score, details) = score_semantic_similarity("", "");
        assert_eq!(score, 0.0);
        assert_eq!(details.method, METHOD_OVERLAP);
        assert_eq!(details.similarity_score, 0.0);
    }

    #[test]
    fn test_stop_word_only_documents_fall_back() {
        // Every token is a stop word, so the vocabulary is empty; the
        // fallback still sees the raw word sets and finds full overlap.
        let (score, details) = score_semantic_similarity("the and of", "the and of");
        assert_eq!(details.method, METHOD_OVERLAP);
        assert!((details.similarity_score - 1.0).abs() < 1e-9);
        assert_eq!(score, MAX_SCORE);
    }

    #[test]
    fn test_one_empty_document_stays_on_primary_path() {
        // The JD still produces vocabulary, so vectorization succeeds; the
        // resume vector is all zeros and the cosine is 0.
        let (score, details) = score_semantic_similarity("", "rust engineer wanted");
        assert_eq!(details.method, METHOD_TFIDF);
        assert_eq!(details.similarity_score, 0.0);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_vocabulary_error_is_empty_vocabulary() {
        let docs = [term_sequence(""), term_sequence("")];
        assert_eq!(
            build_vocabulary(&docs).unwrap_err(),
            VectorizeError::EmptyVocabulary
        );
    }

    #[test]
    fn test_bigrams_included_in_term_space() {
        let terms = term_sequence("distributed data pipelines");
        assert!(terms.contains(&"distributed data".to_owned()));
        assert!(terms.contains(&"data pipelines".to_owned()));
    }

    #[test]
    fn test_vocabulary_ranked_by_document_frequency_then_term() {
        let docs = [
            term_sequence("alpha beta"),
            term_sequence("beta gamma"),
        ];
        let vocabulary = build_vocabulary(&docs).unwrap();
        // "beta" appears in both documents, so it ranks first; the rest tie
        // at df 1 and sort lexicographically.
        assert_eq!(vocabulary[0].0, "beta");
        assert_eq!(vocabulary[0].1, 2);
        let tail: Vec<&str> = vocabulary[1..].iter().map(|(t, _)| t.as_str()).collect();
        let mut sorted_tail = tail.clone();
        sorted_tail.sort();
        assert_eq!(tail, sorted_tail);
    }

    #[test]
    fn test_interpretation_reports_percentage() {
        let text = "rust engineer";
        let (_, details) = score_semantic_similarity(text, text);
        assert_eq!(details.interpretation, "100.0% semantic overlap");
    }

    #[test]
    fn test_word_overlap_zero_when_jd_empty() {
        assert_eq!(word_overlap_similarity("some words", ""), 0.0);
    }
}
