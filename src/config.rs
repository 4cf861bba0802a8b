use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::provider::models::{SortDirection, SortSpec};
use crate::search::ProviderPolicy;

/// Central configuration loaded from environment variables.
///
/// The provider API key comes from the environment only (never hardcoded).
/// The .env file is loaded at startup via dotenvy.
pub struct Config {
    /// Influencer data provider base URL. Empty means "no provider": every
    /// search uses the local dataset.
    pub provider_url: String,
    pub provider_api_key: String,
    /// Provider calls per second (SCOUT_PROVIDER_QPS)
    pub provider_qps: f64,
    pub provider_timeout: Duration,
    /// How many selected platforms may still go to the provider
    pub provider_max_platforms: usize,
    pub results_page: u32,
    pub sort: SortSpec,
    /// JSON file with the fallback profile dataset
    pub dataset_path: PathBuf,
    /// Simulated latency before a fallback search
    pub fallback_latency: Duration,
}

/// Parse an optional env var, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Invalid value for {name}: {raw:?}")),
        _ => Ok(default),
    }
}

/// Provider request rate: must be a finite number above zero.
fn request_rate(qps: f64) -> Result<f64> {
    if !qps.is_finite() || qps <= 0.0 {
        anyhow::bail!(
            "SCOUT_PROVIDER_QPS must be a positive number of requests per second, got {qps}"
        );
    }
    Ok(qps)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default, so a bare environment gives an offline
    /// setup that searches `./data/profiles.json`.
    pub fn load() -> Result<Self> {
        Ok(Self {
            provider_url: env::var("SCOUT_PROVIDER_URL").unwrap_or_default(),
            provider_api_key: env::var("SCOUT_PROVIDER_API_KEY").unwrap_or_default(),
            provider_qps: request_rate(parse_var("SCOUT_PROVIDER_QPS", 2.0)?)?,
            provider_timeout: Duration::from_secs(parse_var("SCOUT_PROVIDER_TIMEOUT_SECS", 10)?),
            provider_max_platforms: parse_var("SCOUT_PROVIDER_MAX_PLATFORMS", 1)?,
            results_page: parse_var("SCOUT_RESULTS_PAGE", 0)?,
            sort: SortSpec {
                field: env::var("SCOUT_SORT_FIELD").unwrap_or_else(|_| "followers".to_string()),
                direction: parse_var("SCOUT_SORT_DIRECTION", SortDirection::Desc)?,
            },
            dataset_path: env::var("SCOUT_DATASET_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/profiles.json")),
            fallback_latency: Duration::from_millis(parse_var("SCOUT_FALLBACK_LATENCY_MS", 300)?),
        })
    }

    pub fn provider_enabled(&self) -> bool {
        !self.provider_url.trim().is_empty()
    }

    /// Check that the provider is fully configured.
    /// Call this before any operation that must reach the provider.
    pub fn require_provider(&self) -> Result<()> {
        if !self.provider_enabled() {
            anyhow::bail!(
                "SCOUT_PROVIDER_URL not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        if self.provider_api_key.is_empty() {
            anyhow::bail!(
                "SCOUT_PROVIDER_API_KEY not set. The provider rejects unauthenticated searches.\n\
                 Add it to your .env file. See .env.example for details."
            );
        }
        Ok(())
    }

    /// Provider routing policy built from the configured limits.
    pub fn provider_policy(&self) -> ProviderPolicy {
        ProviderPolicy {
            max_platforms: self.provider_max_platforms,
            page: self.results_page,
            sort: self.sort.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rate_accepts_positive_values() {
        assert_eq!(request_rate(2.0).unwrap(), 2.0);
        assert_eq!(request_rate(0.5).unwrap(), 0.5);
    }

    #[test]
    fn test_request_rate_rejects_unusable_values() {
        for qps in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(request_rate(qps).is_err(), "{qps} should be rejected");
        }
    }

    #[test]
    fn test_sort_direction_is_parsed_case_insensitively() {
        env::set_var("SCOUT_TEST_SORT_DIRECTION_UPPER", "ASC");
        let direction = parse_var("SCOUT_TEST_SORT_DIRECTION_UPPER", SortDirection::Desc).unwrap();
        assert_eq!(direction, SortDirection::Asc);
    }

    #[test]
    fn test_unknown_sort_direction_is_an_error() {
        env::set_var("SCOUT_TEST_SORT_DIRECTION_TYPO", "ascending");
        let result = parse_var("SCOUT_TEST_SORT_DIRECTION_TYPO", SortDirection::Desc);
        assert!(result.is_err());
    }

    #[test]
    fn test_unset_sort_direction_defaults_to_desc() {
        let direction = parse_var("SCOUT_TEST_SORT_DIRECTION_UNSET", SortDirection::Desc).unwrap();
        assert_eq!(direction, SortDirection::Desc);
    }
}
