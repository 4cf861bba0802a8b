// Scout: faceted influencer search
//
// This is the library root. Each module corresponds to one stage of the
// search: filters are translated, sent to the provider or the local
// fallback, then aggregated into a result envelope.

pub mod analysis;
pub mod config;
pub mod error;
pub mod facets;
pub mod fallback;
pub mod filters;
pub mod models;
pub mod output;
pub mod provider;
pub mod search;
pub mod status;
pub mod translate;
