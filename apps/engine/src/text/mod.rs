// Text canonicalization layer. Every scorer that needs token-level input goes
// through `normalize` so resume and JD tokens are always comparable.

pub mod keywords;
pub mod normalize;

pub use keywords::extract_keywords;
pub use normalize::normalize;
