// Error taxonomy for the search core.
//
// Provider failures are always recoverable (the orchestrator falls back to the
// local dataset), so they live in their own enum. Only `SearchError` ever
// reaches the caller.

use thiserror::Error;

/// A filter model that breaks one of its numeric invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("{field}: min must not exceed max")]
    InvertedRange { field: String },

    #[error("{field}: value {value} is outside {min}..={max}")]
    OutOfBounds {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field}: must not be blank")]
    Blank { field: String },
}

/// Why the provider path could not produce results.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No provider configured, no platform selected, or the platform policy
    /// rules the request out.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("provider transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    Decode(String),
}

/// Fatal search failures. Callers should show `SearchResults::empty()`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid filters: {0}")]
    InvalidFilters(#[from] FilterError),
}
