// Invariant checks and constraint counting for the filter model.

use crate::error::FilterError;

use super::model::{FilterModel, Range, Weighted};

type Check = Result<(), FilterError>;

fn ordered<T: PartialOrd + Copy>(field: &str, range: Option<&Range<T>>) -> Check {
    match range {
        Some(r) if !r.is_ordered() => Err(FilterError::InvertedRange {
            field: field.to_string(),
        }),
        _ => Ok(()),
    }
}

fn bounded(field: &str, value: f64, min: f64, max: f64) -> Check {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(FilterError::OutOfBounds {
            field: field.to_string(),
            value,
            min,
            max,
        })
    }
}

/// An ordered range whose bounds are percentages.
fn percent_range(field: &str, range: Option<&Range<f64>>) -> Check {
    ordered(field, range)?;
    if let Some(r) = range {
        for v in r.min.iter().chain(r.max.iter()) {
            bounded(field, *v, 0.0, 100.0)?;
        }
    }
    Ok(())
}

fn weights(field: &str, items: &[Weighted]) -> Check {
    for item in items {
        bounded(&format!("{field}[{}]", item.id), item.weight, 0.0, 1.0)?;
    }
    Ok(())
}

impl FilterModel {
    /// Check every numeric invariant: ranges ordered, weights in `[0, 1]`
    /// (age-bracket weights in `[0.1, 1]`), percentages in `[0, 100]`.
    pub fn validate(&self) -> Result<(), FilterError> {
        if let Some(creator) = &self.creator {
            ordered("creator.age", creator.age.as_ref())?;
        }

        if let Some(audience) = &self.audience {
            weights("audience.countries", &audience.countries)?;
            weights("audience.cities", &audience.cities)?;
            weights("audience.interests", &audience.interests)?;
            if let Some(language) = &audience.language {
                bounded("audience.language", language.weight, 0.0, 1.0)?;
            }
            if let Some(gender) = &audience.gender {
                percent_range("audience.gender.male", gender.male.as_ref())?;
                percent_range("audience.gender.female", gender.female.as_ref())?;
            }
            for age in &audience.ages {
                let field = format!("audience.ages[{}]", age.bracket.label());
                percent_range(&field, age.constraint.range.as_ref())?;
                if let Some(weight) = age.constraint.weight {
                    bounded(&field, weight, 0.1, 1.0)?;
                }
            }
            if let Some(credibility) = audience.credibility {
                bounded("audience.credibility", credibility, 0.0, 1.0)?;
            }
            ordered("audience.followersRange", audience.followers_range.as_ref())?;
        }

        if let Some(perf) = &self.performance {
            ordered("performance.followers", perf.followers.as_ref())?;
            ordered("performance.views", perf.views.as_ref())?;
            ordered("performance.engagementRate", perf.engagement_rate.as_ref())?;
            ordered("performance.likes", perf.likes.as_ref())?;
            ordered("performance.comments", perf.comments.as_ref())?;
            ordered("performance.shares", perf.shares.as_ref())?;
            ordered("performance.saves", perf.saves.as_ref())?;
        }

        if let Some(growth) = &self.growth {
            ordered("growth.followerGrowth", growth.follower_growth.as_ref())?;
            ordered("growth.engagementGrowth", growth.engagement_growth.as_ref())?;
            if growth.period.as_deref().is_some_and(|p| p.trim().is_empty()) {
                return Err(FilterError::Blank {
                    field: "growth.period".to_string(),
                });
            }
        }

        if let Some(content) = &self.content {
            ordered("content.postsPerWeek", content.posts_per_week.as_ref())?;
            percent_range("content.videoPercentage", content.video_percentage.as_ref())?;
        }

        if let Some(advanced) = &self.advanced {
            if let Some(fake) = advanced.max_fake_followers {
                bounded("advanced.maxFakeFollowers", fake, 0.0, 1.0)?;
            }
        }

        Ok(())
    }

    /// Number of populated constraints across all groups. Platforms count
    /// as one constraint regardless of how many are selected.
    pub fn active_count(&self) -> usize {
        fn flag<T>(o: &Option<T>) -> usize {
            usize::from(o.is_some())
        }
        fn list<T>(v: &[T]) -> usize {
            usize::from(!v.is_empty())
        }

        let mut count = list(&self.platforms);

        if let Some(c) = &self.creator {
            count += flag(&c.bio)
                + flag(&c.keywords)
                + list(&c.categories)
                + list(&c.relevance)
                + flag(&c.gender)
                + flag(&c.age)
                + usize::from(c.location.as_ref().is_some_and(|l| !l.is_empty()))
                + flag(&c.verified)
                + flag(&c.has_email)
                + flag(&c.has_phone)
                + flag(&c.account_type);
        }
        if let Some(a) = &self.audience {
            count += list(&a.countries)
                + list(&a.cities)
                + flag(&a.language)
                + flag(&a.gender)
                + list(&a.ages)
                + list(&a.interests)
                + flag(&a.credibility)
                + flag(&a.followers_range);
        }
        if let Some(p) = &self.performance {
            count += flag(&p.followers)
                + flag(&p.views)
                + flag(&p.engagement_rate)
                + flag(&p.likes)
                + flag(&p.comments)
                + flag(&p.shares)
                + flag(&p.saves)
                + flag(&p.has_email)
                + flag(&p.has_phone);
        }
        if let Some(g) = &self.growth {
            count += flag(&g.trend) + flag(&g.follower_growth) + flag(&g.engagement_growth);
        }
        if let Some(c) = &self.content {
            count += list(&c.categories)
                + flag(&c.frequency)
                + flag(&c.posts_per_week)
                + flag(&c.video_percentage)
                + list(&c.days)
                + flag(&c.time_window);
        }
        if let Some(a) = &self.advanced {
            count += list(&a.include_keywords)
                + list(&a.exclude_keywords)
                + list(&a.include_usernames)
                + list(&a.exclude_usernames)
                + flag(&a.min_account_age_days)
                + flag(&a.max_fake_followers);
        }

        count
    }
}
