// System status display: provider configuration and fallback dataset summary.

use colored::Colorize;

use crate::config::Config;
use crate::facets::compute_facets;
use crate::fallback::{InMemoryDataset, ProfileSource};
use crate::output::terminal::display_facets;

/// Display system status to the terminal.
pub fn show(config: &Config, dataset: Option<&InMemoryDataset>) {
    println!("\n{}", "=== Scout status ===".bold());

    if config.provider_enabled() {
        println!("Provider: {}", config.provider_url);
        let key = if config.provider_api_key.is_empty() {
            "missing".red().to_string()
        } else {
            "set".green().to_string()
        };
        println!("  API key: {key}");
        println!(
            "  Rate limit: {} req/s, timeout {}s",
            config.provider_qps,
            config.provider_timeout.as_secs()
        );
        println!(
            "  Used when 1..={} platforms are selected",
            config.provider_max_platforms
        );
        println!(
            "  Sort: {} {:?}, page {}",
            config.sort.field, config.sort.direction, config.results_page
        );
    } else {
        println!("Provider: {}", "not configured".yellow());
        println!("  Set SCOUT_PROVIDER_URL to search the live provider");
    }

    println!("Fallback dataset: {}", config.dataset_path.display());
    match dataset {
        Some(dataset) => {
            println!("  Profiles: {}", dataset.len());
            println!(
                "  Simulated latency: {} ms",
                config.fallback_latency.as_millis()
            );
            if !dataset.is_empty() {
                display_facets(&compute_facets(dataset.profiles()));
            }
        }
        None => {
            println!("  {}", "not found".red());
            println!("  Set SCOUT_DATASET_PATH or create data/profiles.json");
        }
    }
}
