// Filter model: the canonical, typed representation of a search request.
//
// Every group is optional. A missing group (or a missing field inside one)
// means "no constraint", and the translators must leave it out rather than
// invent a default. Serde enforces the enum vocabularies; numeric invariants
// are checked by `FilterModel::validate` in the sibling module.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Social platforms a creator can be searched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Youtube,
    Tiktok,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::Youtube, Platform::Tiktok];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
        }
    }

    /// Human-facing name, used in query summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Youtube => "YouTube",
            Platform::Tiktok => "TikTok",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "instagram" | "ig" => Ok(Platform::Instagram),
            "youtube" | "yt" => Ok(Platform::Youtube),
            "tiktok" | "tt" => Ok(Platform::Tiktok),
            other => Err(format!(
                "unknown platform '{other}' (expected instagram, youtube or tiktok)"
            )),
        }
    }
}

/// An inclusive `{min?, max?}` constraint. Both bounds absent = unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Range<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<T>,
}

impl<T: PartialOrd + Copy> Range<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub fn between(min: T, max: T) -> Self {
        Self::new(Some(min), Some(max))
    }

    pub fn at_least(min: T) -> Self {
        Self::new(Some(min), None)
    }

    pub fn at_most(max: T) -> Self {
        Self::new(None, Some(max))
    }

    /// `min <= max` whenever both are present. NaN bounds are never valid.
    pub fn is_ordered(&self) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => min <= max,
            (Some(v), None) | (None, Some(v)) => v.partial_cmp(&v).is_some(),
            (None, None) => true,
        }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// A value paired with how strongly it should count (0.0..=1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weighted {
    pub id: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Personal,
    Business,
    Creator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Hashtag,
    Mention,
}

/// A hashtag or @mention the creator is known to use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceTag {
    pub kind: TagKind,
    pub value: String,
}

impl RelevanceTag {
    /// The tag as the provider expects it: `#tag` or `@name`.
    pub fn formatted(&self) -> String {
        let bare = self.value.trim_start_matches(['#', '@']);
        match self.kind {
            TagKind::Hashtag => format!("#{bare}"),
            TagKind::Mention => format!("@{bare}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub continents: Vec<String>,
}

impl Location {
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.cities.is_empty() && self.continents.is_empty()
    }
}

/// Who the creator is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorFilters {
    pub bio: Option<String>,
    pub keywords: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub relevance: Vec<RelevanceTag>,
    pub gender: Option<Gender>,
    pub age: Option<Range<u32>>,
    pub location: Option<Location>,
    pub verified: Option<bool>,
    pub has_email: Option<bool>,
    pub has_phone: Option<bool>,
    pub account_type: Option<AccountType>,
}

/// The six fixed audience age brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "13-17")]
    Teens,
    #[serde(rename = "18-24")]
    YoungAdults,
    #[serde(rename = "25-34")]
    Adults,
    #[serde(rename = "35-44")]
    MidAdults,
    #[serde(rename = "45-54")]
    Mature,
    #[serde(rename = "55+")]
    Seniors,
}

impl AgeBracket {
    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::Teens => "13-17",
            AgeBracket::YoungAdults => "18-24",
            AgeBracket::Adults => "25-34",
            AgeBracket::MidAdults => "35-44",
            AgeBracket::Mature => "45-54",
            AgeBracket::Seniors => "55+",
        }
    }
}

/// How one age bracket is constrained: a share-of-audience range (percent),
/// a weight (0.1..=1.0), or both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeConstraint {
    pub range: Option<Range<f64>>,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketFilter {
    pub bracket: AgeBracket,
    #[serde(flatten)]
    pub constraint: AgeConstraint,
}

/// Audience gender split, each side a percentage range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderSplit {
    pub male: Option<Range<f64>>,
    pub female: Option<Range<f64>>,
}

/// Who follows the creator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceFilters {
    #[serde(default)]
    pub countries: Vec<Weighted>,
    #[serde(default)]
    pub cities: Vec<Weighted>,
    pub language: Option<Weighted>,
    pub gender: Option<GenderSplit>,
    #[serde(default)]
    pub ages: Vec<BracketFilter>,
    #[serde(default)]
    pub interests: Vec<Weighted>,
    pub credibility: Option<f64>,
    /// Audience size; used when `performance.followers` is not given.
    pub followers_range: Option<Range<u64>>,
}

/// How the creator's content performs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceFilters {
    pub followers: Option<Range<u64>>,
    pub views: Option<Range<u64>>,
    /// Percent, e.g. `3.5` for 3.5%.
    pub engagement_rate: Option<Range<f64>>,
    pub likes: Option<Range<u64>>,
    pub comments: Option<Range<u64>>,
    pub shares: Option<Range<u64>>,
    pub saves: Option<Range<u64>>,
    pub has_email: Option<bool>,
    pub has_phone: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthTrend {
    Declining,
    Stable,
    Growing,
    FastGrowing,
    Viral,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthFilters {
    pub trend: Option<GrowthTrend>,
    /// Percent change over `period`.
    pub follower_growth: Option<Range<f64>>,
    pub engagement_growth: Option<Range<f64>>,
    /// Window the growth rates refer to, e.g. `"30d"` or `"3m"`.
    pub period: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostingFrequency {
    Daily,
    SeveralPerWeek,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFilters {
    #[serde(default)]
    pub categories: Vec<String>,
    pub frequency: Option<PostingFrequency>,
    pub posts_per_week: Option<Range<f64>>,
    /// Share of posts that are video, in percent.
    pub video_percentage: Option<Range<f64>>,
    #[serde(default)]
    pub days: Vec<Weekday>,
    pub time_window: Option<TimeWindow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedFilters {
    #[serde(default)]
    pub include_keywords: Vec<String>,
    #[serde(default)]
    pub exclude_keywords: Vec<String>,
    #[serde(default)]
    pub include_usernames: Vec<String>,
    #[serde(default)]
    pub exclude_usernames: Vec<String>,
    pub min_account_age_days: Option<u32>,
    /// 0.0..=1.0 share of followers suspected to be fake.
    pub max_fake_followers: Option<f64>,
}

/// The complete search intent for one search call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterModel {
    #[serde(default)]
    pub platforms: Vec<Platform>,
    pub creator: Option<CreatorFilters>,
    pub audience: Option<AudienceFilters>,
    pub performance: Option<PerformanceFilters>,
    pub growth: Option<GrowthFilters>,
    pub content: Option<ContentFilters>,
    pub advanced: Option<AdvancedFilters>,
}

impl FilterModel {
    /// Filters restricted to the given platforms and nothing else.
    pub fn for_platforms(platforms: &[Platform]) -> Self {
        Self {
            platforms: platforms.to_vec(),
            ..Default::default()
        }
    }

    /// Follower range from performance, falling back to audience size.
    pub fn follower_range(&self) -> Option<Range<u64>> {
        self.performance
            .as_ref()
            .and_then(|p| p.followers)
            .or_else(|| self.audience.as_ref().and_then(|a| a.followers_range))
    }

    /// Has-email flag from the creator group, falling back to performance.
    pub fn has_email(&self) -> Option<bool> {
        self.creator
            .as_ref()
            .and_then(|c| c.has_email)
            .or_else(|| self.performance.as_ref().and_then(|p| p.has_email))
    }

    pub fn has_phone(&self) -> Option<bool> {
        self.creator
            .as_ref()
            .and_then(|c| c.has_phone)
            .or_else(|| self.performance.as_ref().and_then(|p| p.has_phone))
    }
}
