// Fallback search: local dataset queried when the provider can't be used.

pub mod dataset;
pub mod search;

pub use dataset::{InMemoryDataset, ProfileSource};
pub use search::FallbackSearch;
