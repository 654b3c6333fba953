//! Lifeboard CLI - load one user's dashboard and print the overview.

use std::io;

use anyhow::{bail, Result};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lifeboard::cache::SWEEP_INTERVAL;
use lifeboard::{Config, Dashboard, DataCache, RestClient};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    }
    .with_env_overrides();

    let Some(api_url) = config.api_url else {
        bail!("backend URL not configured (set LIFEBOARD_API_URL or edit the config file)");
    };
    let Some(api_key) = config.api_key else {
        bail!("API key not configured (set LIFEBOARD_API_KEY or edit the config file)");
    };
    let Some(user_id) = config.user_id else {
        bail!("user id not configured (set LIFEBOARD_USER_ID or edit the config file)");
    };

    info!("lifeboard starting");

    let store = RestClient::new(api_url, &api_key)?;
    let cache = DataCache::new();
    let _sweeper = cache.start_sweeper(SWEEP_INTERVAL);

    let mut dashboard = Dashboard::new(store, cache, user_id);
    dashboard.load().await;

    let state = dashboard.state();
    if let Some(error) = &state.error {
        bail!("dashboard load failed: {}", error);
    }

    match &state.profile {
        Some(profile) => println!("Dashboard for {}", profile.name),
        None => println!("Dashboard (no profile on record)"),
    }

    let stats = dashboard.stats();
    println!();
    println!(
        "Skills:     {} (avg level {:.1})",
        stats.total_skills, stats.avg_skill_level
    );
    println!(
        "Assets:     {} (total value {:.2})",
        stats.total_assets, stats.total_asset_value
    );
    println!(
        "Milestones: {} ({} completed)",
        stats.total_milestones, stats.completed_milestones
    );
    println!(
        "Talents: {}   Strengths: {}   Weaknesses: {}",
        stats.total_talents, stats.total_strengths, stats.total_weaknesses
    );

    let insights = dashboard.insights();
    print_section("Today's focus", &insights.daily_focus);
    print_section("This week's highlights", &insights.weekly_highlights);
    print_section("Improvement suggestions", &insights.improvement_suggestions);

    Ok(())
}

fn print_section(title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    println!("\n{}:", title);
    for line in lines {
        println!("  - {}", line);
    }
}
