use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use company_scraper::core::DEFAULT_USER_AGENT;
use company_scraper::storage::read_url_file;
use company_scraper::{
    BatchConfig, BatchRunner, CompanyExtractor, CsvStorage, HttpScraper, LabelMatching,
};

/// Extract company profile attributes from a list of URLs into a CSV table.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file with one profile URL per row, no header
    input: PathBuf,

    /// Destination CSV file (overwritten)
    output: PathBuf,

    /// Pause between two requests, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// Give up on a single page after this many seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Match field labels ignoring case and surrounding whitespace
    #[arg(long)]
    relaxed_labels: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module("selectors", log::LevelFilter::Warn)
        .filter_module("html5ever", log::LevelFilter::Error)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let label_matching = if args.relaxed_labels {
        LabelMatching::Normalized
    } else {
        LabelMatching::Exact
    };

    let config = BatchConfig::default()
        .with_delay(Duration::from_millis(args.delay_ms))
        .with_request_timeout(Duration::from_secs(args.timeout_secs))
        .with_user_agent(args.user_agent)
        .with_label_matching(label_matching);

    let urls = read_url_file(&args.input)
        .with_context(|| format!("failed to read URL list {}", args.input.display()))?;
    let mut storage = CsvStorage::create(&args.output)
        .with_context(|| format!("failed to create output file {}", args.output.display()))?;

    let scraper = HttpScraper::with_config(&config).context("failed to build HTTP client")?;
    let extractor = CompanyExtractor::new(config.label_matching);
    let runner = BatchRunner::new(Box::new(scraper), Box::new(extractor), config);

    runner
        .run_with_sink(&urls, &mut storage)
        .await
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    runner.stats().print_summary();
    Ok(())
}
