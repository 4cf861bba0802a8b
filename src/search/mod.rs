// Search orchestration: routes a filter model to the provider or the local
// fallback and packages the result envelope.

pub mod orchestrator;
pub mod tracker;

pub use orchestrator::{ProviderPolicy, SearchOrchestrator};
pub use tracker::{LatestResults, RequestId};
