// Filter model → provider filter.
//
// Only fields present in the filter model are copied across. A group that
// ends up with nothing set is dropped entirely so the serialized request
// carries no empty objects.

use crate::filters::model::{GrowthFilters, Location, Range};
use crate::filters::FilterModel;
use crate::provider::models::{
    AudienceFilter, ContactFilter, ContactType, FilterAction, GrowthRate, InfluencerFilter,
    ProviderFilter, ProviderRequest, SortSpec,
};

/// Translate the filter model into the provider's filter object.
pub fn to_provider_query(filters: &FilterModel) -> ProviderFilter {
    let influencer = influencer_filter(filters);
    let audience = audience_filter(filters);

    ProviderFilter {
        influencer: (influencer != InfluencerFilter::default()).then_some(influencer),
        audience: (audience != AudienceFilter::default()).then_some(audience),
    }
}

/// Wrap a translated filter with paging and sort options.
pub fn to_provider_request(filters: &FilterModel, page: u32, sort: &SortSpec) -> ProviderRequest {
    ProviderRequest {
        page,
        sort: sort.clone(),
        filter: to_provider_query(filters),
    }
}

fn text(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn locations(location: &Location) -> Vec<String> {
    location
        .countries
        .iter()
        .chain(&location.cities)
        .chain(&location.continents)
        .cloned()
        .collect()
}

fn contact(flag: Option<bool>, contact_type: ContactType) -> Option<ContactFilter> {
    flag.map(|required| ContactFilter {
        contact_type,
        filter_action: if required {
            FilterAction::Must
        } else {
            FilterAction::Not
        },
    })
}

fn growth_rate(growth: &GrowthFilters, range: Option<Range<f64>>) -> Option<GrowthRate> {
    range.map(|range| GrowthRate {
        interval: growth.period.clone(),
        range,
    })
}

/// Percent engagement bounds become fractions on the wire.
fn engagement_fraction(range: Range<f64>) -> Range<f64> {
    Range::new(range.min.map(|v| v / 100.0), range.max.map(|v| v / 100.0))
}

fn influencer_filter(filters: &FilterModel) -> InfluencerFilter {
    let mut out = InfluencerFilter {
        followers: filters.follower_range(),
        ..Default::default()
    };

    if let Some(creator) = &filters.creator {
        out.bio = text(creator.bio.as_ref());
        out.keywords = text(creator.keywords.as_ref());
        out.interests = creator.categories.clone();
        out.relevance = creator.relevance.iter().map(|t| t.formatted()).collect();
        out.gender = creator.gender;
        out.age = creator.age;
        out.location = creator.location.as_ref().map(locations).unwrap_or_default();
        out.is_verified = creator.verified;
        out.account_types = creator.account_type.into_iter().collect();
    }

    out.has_contact_details = [
        contact(filters.has_email(), ContactType::Email),
        contact(filters.has_phone(), ContactType::Phone),
    ]
    .into_iter()
    .flatten()
    .collect();

    if let Some(perf) = &filters.performance {
        out.views = perf.views;
        out.engagement_rate = perf.engagement_rate.map(engagement_fraction);
        out.likes = perf.likes;
        out.comments = perf.comments;
        out.shares = perf.shares;
        out.saves = perf.saves;
    }

    if let Some(growth) = &filters.growth {
        out.growth_trend = growth.trend;
        out.followers_growth_rate = growth_rate(growth, growth.follower_growth);
        out.engagement_growth_rate = growth_rate(growth, growth.engagement_growth);
    }

    if let Some(content) = &filters.content {
        out.content_categories = content.categories.clone();
        out.posting_frequency = content.frequency;
        out.posts_per_week = content.posts_per_week;
        out.video_percentage = content.video_percentage;
        out.posting_days = content.days.clone();
        out.posting_window = content.time_window;
    }

    if let Some(advanced) = &filters.advanced {
        out.include_keywords = advanced.include_keywords.clone();
        out.exclude_keywords = advanced.exclude_keywords.clone();
        out.include_usernames = advanced.include_usernames.clone();
        out.exclude_usernames = advanced.exclude_usernames.clone();
        out.min_account_age_days = advanced.min_account_age_days;
        out.max_fake_followers = advanced.max_fake_followers;
    }

    out
}

fn audience_filter(filters: &FilterModel) -> AudienceFilter {
    let Some(audience) = &filters.audience else {
        return AudienceFilter::default();
    };

    AudienceFilter {
        countries: audience.countries.clone(),
        cities: audience.cities.clone(),
        language: audience.language.clone(),
        gender: audience.gender,
        age: audience.ages.clone(),
        interests: audience.interests.clone(),
        credibility: audience.credibility,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::model::{CreatorFilters, PerformanceFilters};
    use crate::filters::Platform;

    #[test]
    fn test_empty_filters_produce_empty_query() {
        let query = to_provider_query(&FilterModel::for_platforms(&[Platform::Youtube]));
        assert_eq!(query, ProviderFilter::default());
        assert_eq!(serde_json::to_string(&query).unwrap(), "{}");
    }

    #[test]
    fn test_blank_bio_is_omitted() {
        let filters = FilterModel {
            creator: Some(CreatorFilters {
                bio: Some("   ".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(to_provider_query(&filters).influencer.is_none());
    }

    #[test]
    fn test_engagement_is_sent_as_fraction() {
        let filters = FilterModel {
            performance: Some(PerformanceFilters {
                engagement_rate: Some(Range::between(2.0, 5.0)),
                ..Default::default()
            }),
            ..Default::default()
        };
        let influencer = to_provider_query(&filters).influencer.unwrap();
        assert_eq!(influencer.engagement_rate, Some(Range::between(0.02, 0.05)));
    }
}
