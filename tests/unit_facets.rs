// Unit tests for facet aggregation.
//
// Bucket boundaries for followers and engagement rate, and the completeness
// invariant: every facet map sums to the number of profiles.

use scout::facets::{compute_facets, EngagementBucket, FollowerBucket};
use scout::filters::Platform;
use scout::models::{FacetCounts, Profile};

fn profile(id: &str, platform: Platform, followers: u64, rate: f64, country: &str) -> Profile {
    Profile {
        id: id.to_string(),
        name: format!("Creator {id}"),
        username: format!("creator_{id}"),
        platform,
        avatar: String::new(),
        followers,
        engagement: 0,
        engagement_rate: rate,
        country: country.to_string(),
        verified: false,
        email: None,
        bio: None,
    }
}

fn total(counts: &FacetCounts) -> usize {
    counts.values().sum()
}

// ============================================================
// FollowerBucket::from_followers: boundary conditions
// ============================================================

#[test]
fn followers_exact_ten_million() {
    assert_eq!(FollowerBucket::from_followers(10_000_000).as_str(), "10M+");
}

#[test]
fn followers_just_below_ten_million() {
    assert_eq!(FollowerBucket::from_followers(9_999_999).as_str(), "5M-10M");
}

#[test]
fn followers_just_below_one_million() {
    assert_eq!(FollowerBucket::from_followers(999_999).as_str(), "500K-1M");
}

#[test]
fn followers_zero() {
    assert_eq!(FollowerBucket::from_followers(0).as_str(), "0-10K");
}

#[test]
fn followers_every_threshold_starts_its_bucket() {
    let cases = [
        (5_000_000, "5M-10M"),
        (1_000_000, "1M-5M"),
        (500_000, "500K-1M"),
        (100_000, "100K-500K"),
        (50_000, "50K-100K"),
        (10_000, "10K-50K"),
        (9_999, "0-10K"),
    ];
    for (followers, expected) in cases {
        assert_eq!(
            FollowerBucket::from_followers(followers).as_str(),
            expected,
            "{followers} followers should land in {expected}"
        );
    }
}

// ============================================================
// EngagementBucket::from_rate: boundary conditions
// ============================================================

#[test]
fn engagement_thresholds() {
    let cases = [
        (25.0, "10%+"),
        (10.0, "10%+"),
        (5.0, "5-10%"),
        (4.99, "3-5%"),
        (3.0, "3-5%"),
        (2.0, "2-3%"),
        (1.5, "1-2%"),
        (0.0, "0-1%"),
        (-1.0, "0-1%"),
    ];
    for (rate, expected) in cases {
        assert_eq!(EngagementBucket::from_rate(rate).as_str(), expected);
    }
}

// ============================================================
// compute_facets
// ============================================================

#[test]
fn three_profile_follower_scenario() {
    let profiles = vec![
        profile("a", Platform::Instagram, 50_000, 2.0, "US"),
        profile("b", Platform::Instagram, 200_000, 2.0, "US"),
        profile("c", Platform::Instagram, 2_000_000, 2.0, "US"),
    ];
    let facets = compute_facets(&profiles);

    assert_eq!(facets.follower_ranges.get("50K-100K"), Some(&1));
    assert_eq!(facets.follower_ranges.get("100K-500K"), Some(&1));
    assert_eq!(facets.follower_ranges.get("1M-5M"), Some(&1));
    // Empty buckets are omitted
    assert_eq!(facets.follower_ranges.get("10K-50K"), None);
    assert_eq!(total(&facets.follower_ranges), 3);
}

#[test]
fn every_facet_sums_to_profile_count() {
    let platforms = Platform::ALL;
    let countries = ["US", "GB", "BR", "JP"];
    let profiles: Vec<Profile> = (0..37u64)
        .map(|i| {
            profile(
                &i.to_string(),
                platforms[(i % 3) as usize],
                i * i * 9_973,
                (i % 13) as f64 * 0.9,
                countries[(i % 4) as usize],
            )
        })
        .collect();

    let facets = compute_facets(&profiles);

    assert_eq!(total(&facets.platforms), profiles.len());
    assert_eq!(total(&facets.countries), profiles.len());
    assert_eq!(total(&facets.follower_ranges), profiles.len());
    assert_eq!(total(&facets.engagement_ranges), profiles.len());
}

#[test]
fn platform_and_country_counts() {
    let profiles = vec![
        profile("a", Platform::Instagram, 1, 0.5, "US"),
        profile("b", Platform::Tiktok, 1, 0.5, "US"),
        profile("c", Platform::Instagram, 1, 0.5, "FR"),
    ];
    let facets = compute_facets(&profiles);

    assert_eq!(facets.platforms.get("instagram"), Some(&2));
    assert_eq!(facets.platforms.get("tiktok"), Some(&1));
    assert_eq!(facets.platforms.get("youtube"), None);
    assert_eq!(facets.countries.get("US"), Some(&2));
    assert_eq!(facets.countries.get("FR"), Some(&1));
}

#[test]
fn facets_serialize_camel_case() {
    let facets = compute_facets(&[profile("a", Platform::Youtube, 12_000, 3.3, "CA")]);
    let json = serde_json::to_value(&facets).unwrap();
    assert_eq!(json["followerRanges"]["10K-50K"], 1);
    assert_eq!(json["engagementRanges"]["3-5%"], 1);
}
