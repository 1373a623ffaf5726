use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tier_price_sync::config::load_config;
use tier_price_sync::pricing::PricingStatus;
use tier_price_sync::scraping::scrape_pricing::scrape_pricing;
use tier_price_sync::utilities::csv_reader::load_dataset;
use tier_price_sync::utilities::csv_writer::write_dataset;
use tier_price_sync::utilities::dataset::processed_output_path;
use tier_price_sync::{HttpPageFetcher, ReconcileSettings, RowReconciler, TracingReporter};

#[derive(Debug, Parser)]
#[command(name = "tier_price_sync")]
#[command(about = "Fills storefront prices and volume tiers into a product CSV")]
struct Cli {
    /// Input CSV; the first column holds product URLs
    #[arg(default_value = "input_copy.csv")]
    input: PathBuf,

    /// Output CSV (defaults to the input path with a processing suffix)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file (defaults to ./Settings.toml when present)
    #[arg(short, long, env = "APP_SETTINGS")]
    config: Option<PathBuf>,

    /// Price a single product URL and print the result instead of a batch run
    #[arg(long, value_name = "URL")]
    probe: Option<String>,

    /// Package quantity used with --probe
    #[arg(long, requires = "probe")]
    quantity: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // Load configuration settings
    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    let fetcher = HttpPageFetcher::new(
        config.storefront.request_timeout_secs,
        &config.storefront.user_agent,
    )
    .context("Failed to build HTTP client")?;

    if let Some(url) = cli.probe {
        let record = scrape_pricing(&fetcher, &url, cli.quantity).await;

        println!("Testing URL: {}", url);
        println!("Regular price: {}", record.regular_price.as_deref().unwrap_or("-"));
        println!("Sale price: {}", record.sales_price.as_deref().unwrap_or("-"));
        println!("Tier string: {}", record.tier_column_value().unwrap_or_default());
        if let PricingStatus::Error(detail) = &record.status {
            println!("{}", format!("Error: {}", detail).red());
        }
        return Ok(());
    }

    let mut dataset = load_dataset(&cli.input)
        .await
        .with_context(|| format!("Error reading dataset {}", cli.input.display()))?;

    println!("Processing {} URLs...", dataset.len());

    let reporter = TracingReporter;
    let reconciler = RowReconciler::new(&fetcher, &reporter, ReconcileSettings::from(&config));
    let summary = reconciler.run(&mut dataset).await;

    let output_path = cli
        .output
        .unwrap_or_else(|| processed_output_path(&cli.input, &config.file.processing_suffix));

    write_dataset(&dataset, &output_path)
        .await
        .with_context(|| format!("Failed to save results to {}", output_path.display()))?;

    println!(
        "{}",
        format!(
            "{} rows: {} updated, {} failed, {} write errors, {} without URL, {} other sites",
            summary.rows,
            summary.updated,
            summary.failed,
            summary.write_failed,
            summary.missing_url,
            summary.foreign_domain
        )
        .yellow()
    );
    println!("{}", format!("Results saved to: {}", output_path.display()).green());

    Ok(())
}
