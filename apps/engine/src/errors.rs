use thiserror::Error;

/// Failure conditions of the primary tf-idf vectorization path.
///
/// These are enumerated so the fallback trigger is testable rather than a
/// broad catch-all. Always recovered internally by the word-overlap fallback;
/// never surfaced to callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorizeError {
    #[error("vocabulary is empty after tokenization and stop-word removal")]
    EmptyVocabulary,
}
