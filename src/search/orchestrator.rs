// Search orchestrator: one entry point that always produces an envelope.
//
// Routing:
// 1. Validate the filter model (the only failure the caller ever sees).
// 2. If a provider is configured and the platform policy accepts the
//    selection, query the provider once per platform and normalize.
// 3. Otherwise, or when the provider fails, narrow to the legacy query and
//    search the local dataset.
// 4. Compute facets and analysis over whichever profiles came back, and
//    stamp the total wall-clock time.

use std::sync::Arc;

use futures::future::try_join_all;
use tokio::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::tracker::{RequestCounter, RequestId};
use crate::analysis::{KeywordAnalyzer, QueryAnalyzer};
use crate::error::{ProviderError, SearchError};
use crate::facets::compute_facets;
use crate::fallback::FallbackSearch;
use crate::filters::{FilterModel, Platform};
use crate::models::{AiAnalysis, Profile, SearchResults, SearchSource};
use crate::provider::models::SortSpec;
use crate::provider::ProviderClient;
use crate::translate::{to_legacy_query, to_provider_request};

/// When the provider path is attempted, and how its requests are shaped.
#[derive(Debug, Clone)]
pub struct ProviderPolicy {
    /// Most platforms a single search may fan out to. The provider takes one
    /// platform per request, so 1 means "exactly one platform selected".
    pub max_platforms: usize,
    pub page: u32,
    pub sort: SortSpec,
}

impl Default for ProviderPolicy {
    fn default() -> Self {
        Self {
            max_platforms: 1,
            page: 0,
            sort: SortSpec::default(),
        }
    }
}

impl ProviderPolicy {
    /// Check whether a platform selection may go to the provider.
    pub fn admits(&self, platforms: &[Platform]) -> Result<(), ProviderError> {
        match platforms.len() {
            0 => Err(ProviderError::Unavailable("no platform selected".to_string())),
            n if n > self.max_platforms => Err(ProviderError::Unavailable(format!(
                "{n} platforms selected, provider policy allows {}",
                self.max_platforms
            ))),
            _ => Ok(()),
        }
    }
}

/// Profiles and metadata from one search path, before facets and timing.
struct PathOutcome {
    profiles: Vec<Profile>,
    total: u64,
    source: SearchSource,
    analysis: Option<AiAnalysis>,
}

pub struct SearchOrchestrator {
    provider: Option<Arc<dyn ProviderClient>>,
    fallback: FallbackSearch,
    analyzer: Arc<dyn QueryAnalyzer>,
    policy: ProviderPolicy,
    fallback_latency: Duration,
    requests: RequestCounter,
}

impl SearchOrchestrator {
    /// An orchestrator with no provider: every search uses the fallback.
    pub fn new(fallback: FallbackSearch) -> Self {
        Self {
            provider: None,
            fallback,
            analyzer: Arc::new(KeywordAnalyzer::default()),
            policy: ProviderPolicy::default(),
            fallback_latency: Duration::ZERO,
            requests: RequestCounter::default(),
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn ProviderClient>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_analyzer(mut self, analyzer: Arc<dyn QueryAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn with_policy(mut self, policy: ProviderPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Artificial delay before the fallback search runs.
    pub fn with_fallback_latency(mut self, latency: Duration) -> Self {
        self.fallback_latency = latency;
        self
    }

    /// Run a search. Provider problems are recovered internally; only an
    /// invalid filter model is returned as an error.
    pub async fn search(
        &self,
        filters: &FilterModel,
        free_text: &str,
    ) -> Result<SearchResults, SearchError> {
        let started = Instant::now();
        filters.validate()?;

        let outcome = match self.provider_search(filters, free_text).await {
            Ok(outcome) => outcome,
            Err(ProviderError::Unavailable(reason)) => {
                debug!(reason = %reason, "Provider path skipped");
                self.fallback_search(filters, free_text).await
            }
            Err(e) => {
                warn!(error = %e, "Provider search failed, using fallback dataset");
                self.fallback_search(filters, free_text).await
            }
        };

        let facets = compute_facets(&outcome.profiles);
        let search_time = started.elapsed().as_millis() as u64;

        info!(
            source = outcome.source.as_str(),
            results = outcome.profiles.len(),
            total = outcome.total,
            ms = search_time,
            "Search complete"
        );

        Ok(SearchResults {
            influencers: outcome.profiles,
            total_count: outcome.total,
            facets,
            search_time,
            ai_analysis: outcome.analysis,
            source: outcome.source,
        })
    }

    /// Run a search stamped with a fresh request id. Publish the result with
    /// `LatestResults::offer` so a slower, older search can't replace it.
    pub async fn search_tracked(
        &self,
        filters: &FilterModel,
        free_text: &str,
    ) -> (RequestId, Result<SearchResults, SearchError>) {
        let id = self.requests.issue();
        let result = self.search(filters, free_text).await;
        if !self.requests.is_latest(id) {
            debug!(request = %id, "Search finished after a newer request was issued");
        }
        (id, result)
    }

    /// Whether `id` belongs to the most recent tracked search.
    pub fn is_latest(&self, id: RequestId) -> bool {
        self.requests.is_latest(id)
    }

    async fn provider_search(
        &self,
        filters: &FilterModel,
        free_text: &str,
    ) -> Result<PathOutcome, ProviderError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| ProviderError::Unavailable("no provider configured".to_string()))?;
        self.policy.admits(&filters.platforms)?;

        let mut request = to_provider_request(filters, self.policy.page, &self.policy.sort);
        let query = free_text.trim();
        if !query.is_empty() {
            let influencer = request.filter.influencer.get_or_insert_with(Default::default);
            if influencer.keywords.is_none() {
                influencer.keywords = Some(query.to_string());
            }
        }

        let request = &request;
        let responses = try_join_all(filters.platforms.iter().map(|&platform| async move {
            provider
                .query(platform, request)
                .await
                .map(|response| (platform, response))
        }))
        .await?;

        let mut profiles = Vec::new();
        let mut total: u64 = 0;
        for (platform, response) in responses {
            total = total.saturating_add(response.total);
            profiles.extend(response.into_profiles(platform));
        }

        let analysis = self.provider_summary(filters, free_text);

        Ok(PathOutcome {
            profiles,
            total,
            source: SearchSource::Provider,
            analysis: Some(analysis),
        })
    }

    async fn fallback_search(&self, filters: &FilterModel, free_text: &str) -> PathOutcome {
        let query = to_legacy_query(filters, free_text);

        if !self.fallback_latency.is_zero() {
            tokio::time::sleep(self.fallback_latency).await;
        }

        let profiles = self.fallback.search(&query);

        PathOutcome {
            total: profiles.len() as u64,
            profiles,
            source: SearchSource::Fallback,
            analysis: self.analyzer.analyze(free_text),
        }
    }

    /// Summary for provider results: which platforms, how many filters, plus
    /// the analyzer's suggestions when there is free text.
    fn provider_summary(&self, filters: &FilterModel, free_text: &str) -> AiAnalysis {
        let platforms: Vec<&str> = filters
            .platforms
            .iter()
            .map(Platform::display_name)
            .collect();
        let active = filters.active_count();
        let base = format!(
            "Searching {} creators with {} active filter{}",
            platforms.join(", "),
            active,
            if active == 1 { "" } else { "s" }
        );

        match self.analyzer.analyze(free_text) {
            Some(analysis) => AiAnalysis {
                query_understanding: format!("{base}. {}", analysis.query_understanding),
                ..analysis
            },
            None => AiAnalysis {
                query_understanding: base,
                suggested_refinements: vec![
                    "Add audience filters to reach a specific market".to_string(),
                    "Set a minimum engagement rate".to_string(),
                ],
                alternative_queries: vec![format!(
                    "top {} creators by engagement rate",
                    platforms.join(" and ")
                )],
            },
        }
    }
}
