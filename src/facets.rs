// Facet aggregation: bucketed counts over a result set.
//
// Bucket thresholds are evaluated top-down and the first match wins. Only
// buckets with at least one profile appear in the output maps.

use crate::models::{FacetCounts, Facets, Profile};

/// Follower-count buckets, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowerBucket {
    TenMillionPlus,
    FiveToTenMillion,
    OneToFiveMillion,
    HalfToOneMillion,
    HundredKToHalfMillion,
    FiftyToHundredK,
    TenToFiftyK,
    UnderTenK,
}

impl FollowerBucket {
    pub fn from_followers(followers: u64) -> Self {
        match followers {
            f if f >= 10_000_000 => FollowerBucket::TenMillionPlus,
            f if f >= 5_000_000 => FollowerBucket::FiveToTenMillion,
            f if f >= 1_000_000 => FollowerBucket::OneToFiveMillion,
            f if f >= 500_000 => FollowerBucket::HalfToOneMillion,
            f if f >= 100_000 => FollowerBucket::HundredKToHalfMillion,
            f if f >= 50_000 => FollowerBucket::FiftyToHundredK,
            f if f >= 10_000 => FollowerBucket::TenToFiftyK,
            _ => FollowerBucket::UnderTenK,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FollowerBucket::TenMillionPlus => "10M+",
            FollowerBucket::FiveToTenMillion => "5M-10M",
            FollowerBucket::OneToFiveMillion => "1M-5M",
            FollowerBucket::HalfToOneMillion => "500K-1M",
            FollowerBucket::HundredKToHalfMillion => "100K-500K",
            FollowerBucket::FiftyToHundredK => "50K-100K",
            FollowerBucket::TenToFiftyK => "10K-50K",
            FollowerBucket::UnderTenK => "0-10K",
        }
    }
}

impl std::fmt::Display for FollowerBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Engagement-rate buckets (percent), highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementBucket {
    TenPlus,
    FiveToTen,
    ThreeToFive,
    TwoToThree,
    OneToTwo,
    UnderOne,
}

impl EngagementBucket {
    pub fn from_rate(rate: f64) -> Self {
        match rate {
            r if r >= 10.0 => EngagementBucket::TenPlus,
            r if r >= 5.0 => EngagementBucket::FiveToTen,
            r if r >= 3.0 => EngagementBucket::ThreeToFive,
            r if r >= 2.0 => EngagementBucket::TwoToThree,
            r if r >= 1.0 => EngagementBucket::OneToTwo,
            // NaN and negatives fall through here
            _ => EngagementBucket::UnderOne,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementBucket::TenPlus => "10%+",
            EngagementBucket::FiveToTen => "5-10%",
            EngagementBucket::ThreeToFive => "3-5%",
            EngagementBucket::TwoToThree => "2-3%",
            EngagementBucket::OneToTwo => "1-2%",
            EngagementBucket::UnderOne => "0-1%",
        }
    }
}

impl std::fmt::Display for EngagementBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn bump(counts: &mut FacetCounts, key: &str) {
    *counts.entry(key.to_string()).or_insert(0) += 1;
}

/// Count profiles per platform, country, follower bucket and engagement
/// bucket. Each map sums to `profiles.len()`.
pub fn compute_facets(profiles: &[Profile]) -> Facets {
    let mut facets = Facets::default();

    for profile in profiles {
        bump(&mut facets.platforms, profile.platform.as_str());
        bump(&mut facets.countries, &profile.country);
        bump(
            &mut facets.follower_ranges,
            FollowerBucket::from_followers(profile.followers).as_str(),
        );
        bump(
            &mut facets.engagement_ranges,
            EngagementBucket::from_rate(profile.engagement_rate).as_str(),
        );
    }

    facets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follower_boundaries() {
        assert_eq!(FollowerBucket::from_followers(10_000_000).as_str(), "10M+");
        assert_eq!(FollowerBucket::from_followers(9_999_999).as_str(), "5M-10M");
        assert_eq!(FollowerBucket::from_followers(999_999).as_str(), "500K-1M");
        assert_eq!(FollowerBucket::from_followers(0).as_str(), "0-10K");
    }

    #[test]
    fn test_engagement_boundaries() {
        assert_eq!(EngagementBucket::from_rate(10.0).as_str(), "10%+");
        assert_eq!(EngagementBucket::from_rate(9.99).as_str(), "5-10%");
        assert_eq!(EngagementBucket::from_rate(1.0).as_str(), "1-2%");
        assert_eq!(EngagementBucket::from_rate(0.99).as_str(), "0-1%");
    }

    #[test]
    fn test_nan_rate_falls_to_lowest_bucket() {
        assert_eq!(
            EngagementBucket::from_rate(f64::NAN),
            EngagementBucket::UnderOne
        );
    }

    #[test]
    fn test_empty_input_gives_empty_facets() {
        assert_eq!(compute_facets(&[]), Facets::default());
    }
}
