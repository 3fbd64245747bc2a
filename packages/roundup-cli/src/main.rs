//! Roundup CLI
//!
//! Runs one harvest for a configured publisher site and prints the
//! consolidated result as JSON on stdout. Diagnostics go to stderr and
//! warnings/errors are additionally persisted to `errors.log`.

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use colored::Colorize;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use deepseek_client::DeepSeekClient;
use firecrawl_client::FirecrawlClient;
use roundups::{
    DeepSeekModel, FirecrawlExtractor, Pipeline, SerpApiSearcher, SiteRegistry,
    DEFAULT_MAX_RESULTS, DEFAULT_MODEL, DEFAULT_WINDOW_START,
};
use serpapi_client::SerpApiClient;

#[derive(Parser)]
#[command(
    name = "roundup",
    version,
    about = "Collect curated food-review roundups for a publisher site and location"
)]
struct Cli {
    /// Site identifier (eater, michelin, infatuation)
    site: String,

    /// Location to search, e.g. "new york"
    location: String,

    /// Only match collections published after DATE (YYYY-MM-DD).
    /// Bare `--since` uses 2024-01-01; pass `--since=DATE` to override.
    #[arg(
        long,
        value_name = "DATE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_WINDOW_START
    )]
    since: Option<NaiveDate>,

    /// Cap on search results fed to the relevance filter
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: u32,

    /// DeepSeek model used for both language-model passes
    #[arg(long, value_name = "MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Disable Firecrawl's supplementary web search during extraction
    #[arg(long)]
    no_web_search: bool,
}

fn init_logging() {
    let file_appender = RollingFileAppender::new(Rotation::NEVER, ".", "errors.log");

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_filter(LevelFilter::WARN);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    // Load environment variables
    dotenvy::dotenv().ok();

    let searcher = SerpApiClient::from_env()?;

    let mut deepseek = DeepSeekClient::from_env()?;
    if let Ok(base_url) = std::env::var("DEEPSEEK_BASE_URL") {
        tracing::info!(base_url = %base_url, "Using custom DeepSeek endpoint");
        deepseek = deepseek.with_base_url(base_url);
    }

    let firecrawl = FirecrawlClient::from_env()?;

    let pipeline = Pipeline::new(
        SiteRegistry::builtin(),
        Arc::new(SerpApiSearcher::new(searcher)),
        Arc::new(DeepSeekModel::new(deepseek).with_model(cli.model)),
        Arc::new(FirecrawlExtractor::new(firecrawl)),
    )
    .with_max_results(cli.max_results)
    .with_web_search(!cli.no_web_search);

    println!(
        "{}",
        format!(
            "Collecting {} roundups for '{}'...",
            cli.site, cli.location
        )
        .bright_yellow()
    );

    let harvest = match pipeline.harvest(&cli.site, &cli.location, cli.since).await {
        Ok(harvest) => harvest,
        Err(e) => {
            println!("{} {}", "✗".bright_red(), e.to_string().bright_red());
            println!(
                "  Supported sites: {}",
                pipeline.registry().site_ids().join(", ")
            );
            std::process::exit(1);
        }
    };

    println!();
    if harvest.candidates.is_empty() {
        println!("{}", "No candidate collections found.".dimmed());
    } else {
        println!("{}", "Candidate collections:".bright_cyan());
        for url in &harvest.candidates {
            println!("  {} {}", "✓".bright_green(), url);
        }
    }

    for degradation in &harvest.degradations {
        println!("  {} {}", "✗".bright_red(), degradation.to_string().bright_red());
    }

    println!();
    println!("{}", serde_json::to_string_pretty(&harvest.data)?);

    Ok(())
}
