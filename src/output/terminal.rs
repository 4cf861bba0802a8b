// Colored terminal output for search results, facets and query analysis.

use colored::Colorize;

use super::{format_count, truncate_chars};
use crate::facets::FollowerBucket;
use crate::models::{AiAnalysis, FacetCounts, Facets, SearchResults, SearchSource};

/// Display a result envelope: header, profile table, facets, analysis.
pub fn display_results(results: &SearchResults) {
    let source = match results.source {
        SearchSource::Provider => "provider".green(),
        SearchSource::Fallback => "local dataset".yellow(),
    };

    println!(
        "\n{}",
        format!(
            "=== {} results ({} total, {} ms) ===",
            results.influencers.len(),
            results.total_count,
            results.search_time
        )
        .bold()
    );
    println!("  Source: {source}");
    println!();

    if results.influencers.is_empty() {
        println!("  No creators matched these filters.");
    } else {
        println!(
            "  {:>3}  {:<28} {:<10} {:>9} {:>7}  {:<14} {}",
            "#".dimmed(),
            "Creator".dimmed(),
            "Platform".dimmed(),
            "Followers".dimmed(),
            "Eng %".dimmed(),
            "Country".dimmed(),
            "Contact".dimmed(),
        );
        println!("  {}", "-".repeat(84).dimmed());

        for (i, profile) in results.influencers.iter().enumerate() {
            let contact = if profile.email.is_some() {
                "email".green().to_string()
            } else {
                "-".dimmed().to_string()
            };

            println!(
                "  {:>3}. {} {:<10} {:>9} {:>7.2}  {:<14} {}",
                i + 1,
                creator_cell(&profile.username, profile.verified),
                profile.platform.as_str(),
                format_count(profile.followers),
                profile.engagement_rate,
                truncate_chars(&profile.country, 14),
                contact,
            );
        }
    }

    display_facets(&results.facets);

    if let Some(analysis) = &results.ai_analysis {
        display_analysis(analysis);
    }
}

const HANDLE_WIDTH: usize = 26;

/// `@handle` padded to a fixed width, then the verified mark. The mark is
/// added after padding since its escape codes would count towards `{:<}`.
fn creator_cell(username: &str, verified: bool) -> String {
    let handle = truncate_chars(&format!("@{username}"), HANDLE_WIDTH - 3);
    let mark = if verified {
        format!("{} ", "✓".blue())
    } else {
        "  ".to_string()
    };
    format!("{handle:<HANDLE_WIDTH$}{mark}")
}

/// Display facet counts, one block per facet.
pub fn display_facets(facets: &Facets) {
    println!("\n{}", "Facets".bold());
    display_facet("Platforms", &facets.platforms, None);
    display_facet("Countries", &facets.countries, None);
    display_facet("Followers", &facets.follower_ranges, Some(follower_order));
    display_facet("Engagement", &facets.engagement_ranges, None);
}

/// Follower buckets read best smallest-first, not in label order.
fn follower_order(label: &str) -> u64 {
    [
        0, 10_000, 50_000, 100_000, 500_000, 1_000_000, 5_000_000, 10_000_000,
    ]
    .into_iter()
    .find(|&f| FollowerBucket::from_followers(f).as_str() == label)
    .unwrap_or(u64::MAX)
}

fn display_facet(title: &str, counts: &FacetCounts, order: Option<fn(&str) -> u64>) {
    if counts.is_empty() {
        return;
    }

    let mut entries: Vec<(&String, &usize)> = counts.iter().collect();
    if let Some(key) = order {
        entries.sort_by_key(|(label, _)| key(label));
    }

    let line: Vec<String> = entries
        .iter()
        .map(|(label, count)| format!("{label}: {count}"))
        .collect();
    println!("  {:<11} {}", format!("{title}:").dimmed(), line.join("  "));
}

/// Display query understanding and suggestions.
pub fn display_analysis(analysis: &AiAnalysis) {
    println!("\n{}", "Query analysis".bold());
    println!("  {}", analysis.query_understanding);

    if !analysis.suggested_refinements.is_empty() {
        println!("  {}", "Try refining:".dimmed());
        for refinement in &analysis.suggested_refinements {
            println!("    {} {}", "~".yellow(), refinement);
        }
    }
    if !analysis.alternative_queries.is_empty() {
        println!("  {}", "Related searches:".dimmed());
        for alt in &analysis.alternative_queries {
            println!("    {} {}", ">".cyan(), alt);
        }
    }
}
