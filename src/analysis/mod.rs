// Query analysis: short, heuristic interpretation of free-text queries.
//
// The QueryAnalyzer trait keeps the strategy swappable; KeywordAnalyzer is the
// default and needs no external service.

pub mod keyword;
pub mod traits;

pub use keyword::KeywordAnalyzer;
pub use traits::QueryAnalyzer;
