// Provider wire types: request and response bodies for the influencer data API.
//
// Every optional filter field is skipped when unset so the provider applies
// no implicit constraint for it.

use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::filters::model::{
    AccountType, BracketFilter, Gender, GenderSplit, GrowthTrend, PostingFrequency, Range,
    TimeWindow, Weighted,
};
use crate::filters::Platform;
use crate::models::Profile;

/// Placeholder for fields the provider response does not carry.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction '{other}' (expected asc or desc)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: "followers".to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// Full request body for one provider query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRequest {
    pub page: u32,
    pub sort: SortSpec,
    pub filter: ProviderFilter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influencer: Option<InfluencerFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<AudienceFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterAction {
    Must,
    Not,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFilter {
    pub contact_type: ContactType,
    pub filter_action: FilterAction,
}

/// Percent growth over an interval such as `"30d"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(flatten)]
    pub range: Range<f64>,
}

/// Constraints on the creator account itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<Range<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<Range<u64>>,
    /// Fraction of followers (0.035 for 3.5%).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_rate: Option<Range<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<Range<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Range<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares: Option<Range<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saves: Option<Range<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relevance: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Range<u32>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub has_contact_details: Vec<ContactFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub account_types: Vec<AccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_trend: Option<GrowthTrend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers_growth_rate: Option<GrowthRate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_growth_rate: Option<GrowthRate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_frequency: Option<PostingFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_per_week: Option<Range<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_percentage: Option<Range<f64>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub posting_days: Vec<Weekday>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_window: Option<TimeWindow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_usernames: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_usernames: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_account_age_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fake_followers: Option<f64>,
}

/// Constraints on the creator's followers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<Weighted>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cities: Vec<Weighted>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Weighted>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<GenderSplit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub age: Vec<BracketFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<Weighted>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credibility: Option<f64>,
}

/// Response body: two record lists plus the provider's total hit count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub lookalikes: Vec<ProviderProfile>,
    pub directs: Vec<ProviderProfile>,
    pub total: u64,
}

impl ProviderResponse {
    /// Lookalikes then directs, each normalized into a `Profile`.
    pub fn into_profiles(self, platform: Platform) -> Vec<Profile> {
        self.lookalikes
            .into_iter()
            .chain(self.directs)
            .map(|p| p.into_profile(platform))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfile {
    pub user_id: String,
    pub profile: ProviderProfileData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfileData {
    #[serde(default)]
    pub fullname: Option<String>,
    pub username: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    pub followers: u64,
    #[serde(default)]
    pub engagements: Option<u64>,
    /// Fraction of followers, not percent.
    #[serde(default)]
    pub engagement_rate: Option<f64>,
}

impl ProviderProfile {
    /// Map into the normalized shape. Verification, email and bio are not in
    /// the provider payload, so they stay at their placeholders.
    pub fn into_profile(self, platform: Platform) -> Profile {
        let data = self.profile;
        Profile {
            id: self.user_id,
            name: data.fullname.unwrap_or_else(|| data.username.clone()),
            username: data.username,
            platform,
            avatar: data.picture.unwrap_or_default(),
            followers: data.followers,
            engagement: data.engagements.unwrap_or(0),
            engagement_rate: data.engagement_rate.map(|r| r * 100.0).unwrap_or(0.0),
            country: UNKNOWN_COUNTRY.to_string(),
            verified: false,
            email: None,
            bio: None,
        }
    }
}
