// Predicate search over a local profile source.
//
// Free text is a case-insensitive substring match against name, username and
// bio. Every other legacy field is an equality or inclusive range check.
// Output keeps the source order, so the same query always returns the same
// list for the same dataset.

use std::sync::Arc;

use tracing::debug;

use super::dataset::ProfileSource;
use crate::models::Profile;
use crate::translate::LegacyQuery;

#[derive(Clone)]
pub struct FallbackSearch {
    source: Arc<dyn ProfileSource>,
}

impl FallbackSearch {
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        Self { source }
    }

    pub fn search(&self, query: &LegacyQuery) -> Vec<Profile> {
        let needle = query.query.trim().to_lowercase();

        let results: Vec<Profile> = self
            .source
            .profiles()
            .iter()
            .filter(|p| matches(p, query, &needle))
            .cloned()
            .collect();

        debug!(
            scanned = self.source.profiles().len(),
            matched = results.len(),
            "Fallback search complete"
        );

        results
    }
}

fn matches(profile: &Profile, query: &LegacyQuery, needle: &str) -> bool {
    if query.platform.is_some_and(|p| p != profile.platform) {
        return false;
    }
    if query.verified.is_some_and(|v| v != profile.verified) {
        return false;
    }
    if query.has_email.is_some_and(|want| want != profile.email.is_some()) {
        return false;
    }
    if let Some(country) = &query.country {
        if !country.eq_ignore_ascii_case(&profile.country) {
            return false;
        }
    }
    if query.followers.is_some_and(|r| !r.contains(profile.followers)) {
        return false;
    }
    if query
        .engagement
        .is_some_and(|r| !r.contains(profile.engagement_rate))
    {
        return false;
    }

    needle.is_empty() || text_matches(profile, needle)
}

fn text_matches(profile: &Profile, needle: &str) -> bool {
    profile.name.to_lowercase().contains(needle)
        || profile.username.to_lowercase().contains(needle)
        || profile
            .bio
            .as_deref()
            .is_some_and(|bio| bio.to_lowercase().contains(needle))
}
