use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};

use scout::analysis::{KeywordAnalyzer, QueryAnalyzer};
use scout::config::Config;
use scout::fallback::{FallbackSearch, InMemoryDataset};
use scout::filters::model::{CreatorFilters, Location, PerformanceFilters};
use scout::filters::{FilterModel, Platform, Range};
use scout::models::SearchResults;
use scout::provider::HttpProviderClient;
use scout::search::SearchOrchestrator;

/// Scout: faceted influencer search.
///
/// Searches the influencer data provider when it can, and the local
/// fallback dataset when it can't.
#[derive(Parser)]
#[command(name = "scout", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for creators
    Search {
        /// Free-text query (matched against name, username and bio)
        query: Vec<String>,

        /// Platform to search (repeatable: instagram, youtube, tiktok)
        #[arg(long = "platform", short = 'p')]
        platforms: Vec<Platform>,

        /// JSON file with a full filter model; flags below override it
        #[arg(long)]
        filters: Option<PathBuf>,

        /// Minimum follower count
        #[arg(long)]
        min_followers: Option<u64>,

        /// Maximum follower count
        #[arg(long)]
        max_followers: Option<u64>,

        /// Minimum engagement rate, in percent
        #[arg(long)]
        min_engagement: Option<f64>,

        /// Maximum engagement rate, in percent
        #[arg(long)]
        max_engagement: Option<f64>,

        /// Creator country
        #[arg(long)]
        country: Option<String>,

        /// Only verified creators
        #[arg(long)]
        verified: bool,

        /// Only creators with a contact email
        #[arg(long)]
        has_email: bool,

        /// Print the result envelope as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show how a free-text query would be interpreted
    Analyze {
        /// The query text
        text: Vec<String>,
    },

    /// Show provider configuration and dataset summary
    Status,
}

/// Search flags that override fields in the filter model.
struct FilterFlags {
    platforms: Vec<Platform>,
    min_followers: Option<u64>,
    max_followers: Option<u64>,
    min_engagement: Option<f64>,
    max_engagement: Option<f64>,
    country: Option<String>,
    verified: bool,
    has_email: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `--json` output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("scout=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            platforms,
            filters,
            min_followers,
            max_followers,
            min_engagement,
            max_engagement,
            country,
            verified,
            has_email,
            json,
        } => {
            let config = Config::load()?;
            let orchestrator = build_orchestrator(&config)?;

            let base = match filters {
                Some(path) => load_filters(&path)?,
                None => FilterModel::default(),
            };
            let filters = apply_flags(
                base,
                FilterFlags {
                    platforms,
                    min_followers,
                    max_followers,
                    min_engagement,
                    max_engagement,
                    country,
                    verified,
                    has_email,
                },
            );
            let query = query.join(" ");

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("  {spinner} {msg}")
                    .context("Invalid spinner template")?,
            );
            spinner.set_message("Searching...");
            spinner.enable_steady_tick(Duration::from_millis(80));

            let (request, result) = orchestrator.search_tracked(&filters, &query).await;
            spinner.finish_and_clear();

            let results = match result {
                Ok(results) => results,
                Err(e) => {
                    error!(request = %request, error = %e, "Search failed");
                    eprintln!("{} {}", "Search failed:".red().bold(), e);
                    SearchResults::empty()
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                scout::output::terminal::display_results(&results);
            }
        }

        Commands::Analyze { text } => {
            let text = text.join(" ");
            match KeywordAnalyzer::default().analyze(&text) {
                Some(analysis) => scout::output::terminal::display_analysis(&analysis),
                None => println!("Nothing to analyze: the query is empty."),
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            let dataset = match InMemoryDataset::from_json_file(&config.dataset_path) {
                Ok(dataset) => Some(dataset),
                Err(e) => {
                    warn!(error = %e, "Fallback dataset unavailable");
                    None
                }
            };
            scout::status::show(&config, dataset.as_ref());
        }
    }

    Ok(())
}

/// Wire the orchestrator from configuration: local dataset always, provider
/// only when a URL is configured.
fn build_orchestrator(config: &Config) -> Result<SearchOrchestrator> {
    let dataset = InMemoryDataset::from_json_file(&config.dataset_path).with_context(|| {
        format!(
            "Fallback dataset is required. Set SCOUT_DATASET_PATH (currently {})",
            config.dataset_path.display()
        )
    })?;

    let mut orchestrator = SearchOrchestrator::new(FallbackSearch::new(Arc::new(dataset)))
        .with_policy(config.provider_policy())
        .with_fallback_latency(config.fallback_latency);

    if config.provider_enabled() {
        config.require_provider()?;
        let client = HttpProviderClient::new(
            &config.provider_url,
            &config.provider_api_key,
            config.provider_qps,
            config.provider_timeout,
        )?;
        orchestrator = orchestrator.with_provider(Arc::new(client));
        info!(url = %config.provider_url, "Provider enabled");
    } else {
        info!("No provider configured, searching the local dataset only");
    }

    Ok(orchestrator)
}

fn load_filters(path: &Path) -> Result<FilterModel> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read filters from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse filters in {}", path.display()))
}

/// Layer command-line flags over a filter model. Flags only ever add or
/// replace constraints; an unset flag leaves the model untouched.
fn apply_flags(mut filters: FilterModel, flags: FilterFlags) -> FilterModel {
    if !flags.platforms.is_empty() {
        filters.platforms = flags.platforms;
    }

    if flags.min_followers.is_some() || flags.max_followers.is_some() {
        let perf = filters
            .performance
            .get_or_insert_with(PerformanceFilters::default);
        let current = perf.followers.unwrap_or_default();
        perf.followers = Some(Range::new(
            flags.min_followers.or(current.min),
            flags.max_followers.or(current.max),
        ));
    }

    if flags.min_engagement.is_some() || flags.max_engagement.is_some() {
        let perf = filters
            .performance
            .get_or_insert_with(PerformanceFilters::default);
        let current = perf.engagement_rate.unwrap_or_default();
        perf.engagement_rate = Some(Range::new(
            flags.min_engagement.or(current.min),
            flags.max_engagement.or(current.max),
        ));
    }

    if flags.country.is_some() || flags.verified || flags.has_email {
        let creator = filters.creator.get_or_insert_with(CreatorFilters::default);
        if let Some(country) = flags.country {
            let location = creator.location.get_or_insert_with(Location::default);
            location.countries.insert(0, country);
        }
        if flags.verified {
            creator.verified = Some(true);
        }
        if flags.has_email {
            creator.has_email = Some(true);
        }
    }

    filters
}
