// Unit tests for the filter model and its two translations.
//
// Covers JSON decoding of the filter model, invariant validation, provider
// field omission, and the narrowing rules of the legacy query.

use scout::error::FilterError;
use scout::filters::model::{
    AudienceFilters, CreatorFilters, GrowthFilters, GrowthTrend, Location, PerformanceFilters,
    RelevanceTag, TagKind,
};
use scout::filters::{FilterModel, Platform, Range};
use scout::provider::models::{ContactType, FilterAction, SortDirection, SortSpec};
use scout::translate::{to_legacy_query, to_provider_query, to_provider_request, LegacyQuery};
use serde_json::json;

// ============================================================
// FilterModel: JSON decoding
// ============================================================

#[test]
fn example_filter_file_decodes_and_validates() {
    let raw = include_str!("../data/filters.example.json");
    let filters: FilterModel = serde_json::from_str(raw).unwrap();
    assert_eq!(filters.platforms, vec![Platform::Instagram]);
    assert!(filters.validate().is_ok());
    assert!(filters.active_count() > 10);
}

#[test]
fn unknown_platform_is_rejected() {
    let result: Result<FilterModel, _> = serde_json::from_value(json!({"platforms": ["myspace"]}));
    assert!(result.is_err());
}

#[test]
fn unknown_growth_trend_is_rejected() {
    let result: Result<FilterModel, _> =
        serde_json::from_value(json!({"growth": {"trend": "exploding"}}));
    assert!(result.is_err());
}

#[test]
fn kebab_case_growth_trend_decodes() {
    let filters: FilterModel =
        serde_json::from_value(json!({"growth": {"trend": "fast-growing"}})).unwrap();
    assert_eq!(
        filters.growth.unwrap().trend,
        Some(GrowthTrend::FastGrowing)
    );
}

#[test]
fn sort_direction_from_str_ignores_case() {
    assert_eq!("ASC".parse::<SortDirection>(), Ok(SortDirection::Asc));
    assert_eq!(" desc ".parse::<SortDirection>(), Ok(SortDirection::Desc));
    assert!("ascending".parse::<SortDirection>().is_err());
}

#[test]
fn platform_from_str_accepts_aliases() {
    assert_eq!("IG".parse::<Platform>(), Ok(Platform::Instagram));
    assert_eq!("youtube".parse::<Platform>(), Ok(Platform::Youtube));
    assert!("vine".parse::<Platform>().is_err());
}

// ============================================================
// FilterModel::validate
// ============================================================

#[test]
fn weight_above_one_is_rejected() {
    let filters: FilterModel = serde_json::from_value(json!({
        "audience": {"countries": [{"id": "US", "weight": 1.2}]}
    }))
    .unwrap();
    assert!(matches!(
        filters.validate(),
        Err(FilterError::OutOfBounds { .. })
    ));
}

#[test]
fn percentage_above_hundred_is_rejected() {
    let filters: FilterModel = serde_json::from_value(json!({
        "audience": {"gender": {"female": {"min": 40, "max": 120}}}
    }))
    .unwrap();
    assert!(filters.validate().is_err());
}

#[test]
fn blank_growth_period_is_rejected() {
    let filters = FilterModel {
        growth: Some(GrowthFilters {
            period: Some("  ".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(
        filters.validate(),
        Err(FilterError::Blank {
            field: "growth.period".to_string()
        })
    );
}

#[test]
fn equal_bounds_are_valid() {
    let filters = FilterModel {
        performance: Some(PerformanceFilters {
            followers: Some(Range::between(100_000, 100_000)),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert!(filters.validate().is_ok());
}

#[test]
fn nan_engagement_bound_is_rejected() {
    let filters = FilterModel {
        performance: Some(PerformanceFilters {
            engagement_rate: Some(Range::at_least(f64::NAN)),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert!(filters.validate().is_err());
}

// ============================================================
// to_provider_query: only present fields are sent
// ============================================================

#[test]
fn provider_query_omits_absent_fields() {
    let filters = FilterModel {
        platforms: vec![Platform::Instagram],
        performance: Some(PerformanceFilters {
            followers: Some(Range::at_least(10_000)),
            ..Default::default()
        }),
        ..Default::default()
    };

    let json = serde_json::to_value(to_provider_query(&filters)).unwrap();
    assert_eq!(json, json!({"influencer": {"followers": {"min": 10_000}}}));
}

#[test]
fn provider_query_maps_creator_fields() {
    let filters = FilterModel {
        creator: Some(CreatorFilters {
            keywords: Some("vegan recipes".to_string()),
            relevance: vec![
                RelevanceTag {
                    kind: TagKind::Hashtag,
                    value: "#plantbased".to_string(),
                },
                RelevanceTag {
                    kind: TagKind::Mention,
                    value: "oatly".to_string(),
                },
            ],
            location: Some(Location {
                countries: vec!["US".to_string()],
                cities: vec!["Austin".to_string()],
                continents: vec![],
            }),
            verified: Some(true),
            has_email: Some(false),
            ..Default::default()
        }),
        ..Default::default()
    };

    let influencer = to_provider_query(&filters).influencer.unwrap();
    assert_eq!(influencer.keywords.as_deref(), Some("vegan recipes"));
    assert_eq!(influencer.relevance, vec!["#plantbased", "@oatly"]);
    assert_eq!(influencer.location, vec!["US", "Austin"]);
    assert_eq!(influencer.is_verified, Some(true));
    assert_eq!(influencer.has_contact_details.len(), 1);
    assert_eq!(
        influencer.has_contact_details[0].contact_type,
        ContactType::Email
    );
    assert_eq!(
        influencer.has_contact_details[0].filter_action,
        FilterAction::Not
    );
}

#[test]
fn provider_query_carries_growth_period() {
    let filters = FilterModel {
        growth: Some(GrowthFilters {
            follower_growth: Some(Range::at_least(10.0)),
            period: Some("90d".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let json = serde_json::to_value(to_provider_query(&filters)).unwrap();
    assert_eq!(
        json["influencer"]["followersGrowthRate"],
        json!({"interval": "90d", "min": 10.0})
    );
    assert!(json["influencer"].get("engagementGrowthRate").is_none());
}

#[test]
fn empty_audience_group_is_dropped() {
    let filters = FilterModel {
        audience: Some(AudienceFilters::default()),
        ..Default::default()
    };
    assert!(to_provider_query(&filters).audience.is_none());
}

#[test]
fn provider_request_wraps_page_and_sort() {
    let sort = SortSpec {
        field: "engagementRate".to_string(),
        direction: SortDirection::Asc,
    };
    let request = to_provider_request(&FilterModel::default(), 2, &sort);
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        json!({"page": 2, "sort": {"field": "engagementRate", "direction": "asc"}, "filter": {}})
    );
}

#[test]
fn provider_translation_does_not_touch_input() {
    let raw = include_str!("../data/filters.example.json");
    let filters: FilterModel = serde_json::from_str(raw).unwrap();
    let before = filters.clone();
    let _ = to_provider_query(&filters);
    let _ = to_legacy_query(&filters, "anything");
    assert_eq!(filters, before);
}

// ============================================================
// to_legacy_query: narrowing
// ============================================================

#[test]
fn legacy_query_of_empty_model() {
    assert_eq!(
        to_legacy_query(&FilterModel::default(), ""),
        LegacyQuery::default()
    );
}

#[test]
fn legacy_query_takes_first_platform_and_country() {
    let filters = FilterModel {
        platforms: vec![Platform::Tiktok, Platform::Youtube],
        creator: Some(CreatorFilters {
            location: Some(Location {
                countries: vec!["Brazil".to_string(), "Portugal".to_string()],
                ..Default::default()
            }),
            verified: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    };

    let query = to_legacy_query(&filters, "  travel  ");
    assert_eq!(query.platform, Some(Platform::Tiktok));
    assert_eq!(query.country.as_deref(), Some("Brazil"));
    assert_eq!(query.verified, Some(true));
    assert_eq!(query.query, "travel");
}

#[test]
fn legacy_query_uses_audience_size_when_performance_is_absent() {
    let filters: FilterModel = serde_json::from_value(json!({
        "platforms": ["instagram"],
        "audience": {"followersRange": {"min": 100000, "max": 500000}}
    }))
    .unwrap();

    let query = to_legacy_query(&filters, "");
    assert_eq!(query.followers, Some(Range::between(100_000, 500_000)));
}

#[test]
fn legacy_query_prefers_performance_followers() {
    let filters = FilterModel {
        audience: Some(AudienceFilters {
            followers_range: Some(Range::between(1, 2)),
            ..Default::default()
        }),
        performance: Some(PerformanceFilters {
            followers: Some(Range::at_most(50_000)),
            engagement_rate: Some(Range::between(1.5, 4.0)),
            has_email: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    };

    let query = to_legacy_query(&filters, "");
    assert_eq!(query.followers, Some(Range::at_most(50_000)));
    assert_eq!(query.engagement, Some(Range::between(1.5, 4.0)));
    assert_eq!(query.has_email, Some(true));
}
