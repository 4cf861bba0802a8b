// Data models: the normalized records that flow out of a search.
//
// Provider and fallback results are both mapped into `Profile` before facets
// are computed, so nothing downstream needs to know where a record came from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filters::Platform;

/// A creator profile in the normalized result shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub username: String,
    pub platform: Platform,
    pub avatar: String,
    pub followers: u64,
    /// Average interactions per post.
    pub engagement: u64,
    /// Engagement as a percent of followers, e.g. `4.2`.
    pub engagement_rate: f64,
    pub country: String,
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Bucket label → count. BTreeMap keeps serialized output stable.
pub type FacetCounts = BTreeMap<String, usize>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub platforms: FacetCounts,
    pub countries: FacetCounts,
    pub follower_ranges: FacetCounts,
    pub engagement_ranges: FacetCounts,
}

/// Lightweight interpretation of the free-text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub query_understanding: String,
    pub suggested_refinements: Vec<String>,
    pub alternative_queries: Vec<String>,
}

/// Which path produced a result envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Provider,
    Fallback,
}

impl SearchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchSource::Provider => "provider",
            SearchSource::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for SearchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The full result envelope returned by a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub influencers: Vec<Profile>,
    pub total_count: u64,
    pub facets: Facets,
    /// Wall-clock milliseconds for the whole call.
    pub search_time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<AiAnalysis>,
    pub source: SearchSource,
}

impl SearchResults {
    /// The envelope to present after a fatal search error.
    pub fn empty() -> Self {
        Self {
            influencers: Vec::new(),
            total_count: 0,
            facets: Facets::default(),
            search_time: 0,
            ai_analysis: None,
            source: SearchSource::Fallback,
        }
    }
}
