// Influencer data provider: trait-based abstraction over the external API.
//
// `ProviderClient` is the interface the orchestrator depends on.
// `HttpProviderClient` talks to the real service; `models` holds the wire
// types both sides share.

pub mod client;
pub mod models;
pub mod rate_limiter;
pub mod traits;

pub use client::HttpProviderClient;
pub use traits::ProviderClient;
