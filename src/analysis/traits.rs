// Query analyzer trait: swap-ready abstraction for query understanding.
//
// The default implementation is keyword matching. A real language model
// backend can implement the same trait without the orchestrator changing.

use crate::models::AiAnalysis;

pub trait QueryAnalyzer: Send + Sync {
    /// Interpret a free-text query.
    ///
    /// Returns `None` for empty or whitespace-only input. For any other input
    /// the returned refinements and alternatives must both be non-empty.
    fn analyze(&self, free_text: &str) -> Option<AiAnalysis>;
}
