// Filter translation: pure mappings from the filter model to the two query
// shapes the search paths need.

pub mod legacy;
pub mod provider;

pub use legacy::{to_legacy_query, LegacyQuery};
pub use provider::{to_provider_query, to_provider_request};
