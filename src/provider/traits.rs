// Provider client trait: the seam between the search core and the data API.
//
// The orchestrator only knows that a provider can answer a query for one
// platform or fail. The HTTP client implements it for production; tests plug
// in stubs.

use async_trait::async_trait;

use super::models::{ProviderRequest, ProviderResponse};
use crate::error::ProviderError;
use crate::filters::Platform;

#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Run one search against the provider for a single platform.
    async fn query(
        &self,
        platform: Platform,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, ProviderError>;
}
