// Filter model → legacy query for the local fallback dataset.
//
// The fallback dataset only understands a handful of flat fields, so
// everything else in the filter model is dropped here.

use serde::{Deserialize, Serialize};

use crate::filters::{FilterModel, Platform, Range};

/// The reduced query the fallback search can evaluate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyQuery {
    pub platform: Option<Platform>,
    pub verified: Option<bool>,
    pub has_email: Option<bool>,
    pub country: Option<String>,
    pub followers: Option<Range<u64>>,
    /// Percent.
    pub engagement: Option<Range<f64>>,
    pub query: String,
}

/// Narrow the filter model to the legacy fields.
///
/// Platform is the first selected platform; country is the first creator
/// location country. Follower bounds come from performance, or from the
/// audience size range when performance has none.
pub fn to_legacy_query(filters: &FilterModel, free_text: &str) -> LegacyQuery {
    LegacyQuery {
        platform: filters.platforms.first().copied(),
        verified: filters.creator.as_ref().and_then(|c| c.verified),
        has_email: filters.has_email(),
        country: filters
            .creator
            .as_ref()
            .and_then(|c| c.location.as_ref())
            .and_then(|l| l.countries.first())
            .cloned(),
        followers: filters.follower_range(),
        engagement: filters
            .performance
            .as_ref()
            .and_then(|p| p.engagement_rate),
        query: free_text.trim().to_string(),
    }
}
