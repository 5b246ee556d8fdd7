use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use progress::ProgressWriter;
use quotes_acquire::{config, HttpFetcher, ScrapeConfig};
use std::path::PathBuf;
use std::time::Duration;

mod progress;

#[derive(Parser)]
#[command(name = "quotes")]
#[command(about = "Scrape a paginated quote listing into a CSV file")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Output CSV path (overwritten if it exists)
    #[arg(default_value = "quotes.csv")]
    output: PathBuf,

    /// Site root; pages are fetched from <base-url>/page/<n>/
    #[arg(long, default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn init_tracing(log_level: &LogLevel, utc: bool, pb: &ProgressBar) {
    // Keep the HTML parser crates quiet at debug/trace
    let level = match log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let pb = pb.clone();
    let make_writer = move || ProgressWriter::new(pb.clone(), std::io::stderr());

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(make_writer)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(make_writer)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let pb = progress::page_spinner()?;
    init_tracing(&cli.log_level, cli.utc, &pb);

    let config = ScrapeConfig::new(&cli.base_url)
        .with_context(|| format!("Invalid base URL: {}", cli.base_url))?
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let fetcher = HttpFetcher::new(&config)?;

    tracing::info!(base = %config.base_url, output = %cli.output.display(), "Scraping quotes");

    progress::start(&pb);
    let result = quotes_acquire::run(&fetcher, config.base_url.clone(), &cli.output, |page, so_far| {
        pb.set_message(format!("page {page} ({} quotes)", so_far.len()));
    })
    .await;
    pb.finish_and_clear();

    let quotes = result.with_context(|| format!("Failed to scrape quotes into {}", cli.output.display()))?;
    tracing::info!(quotes = quotes.len(), path = %cli.output.display(), "Done");

    Ok(())
}
