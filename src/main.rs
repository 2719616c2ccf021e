//! Headline Scraper main entry point
//!
//! This is the command-line interface for the news headline scraper.

use clap::Parser;
use headline_scraper::config::{Config, DEFAULT_URL};
use headline_scraper::extractor::log_failure;
use headline_scraper::output::print_preview;
use headline_scraper::{ScrapeError, Scraper};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Headline Scraper: saves the headlines of a news page to a text file
///
/// Fetches a single page, picks out headline-like text using heading,
/// headline-class and link heuristics, and writes up to 50 unique headlines
/// to a numbered report.
#[derive(Parser, Debug)]
#[command(name = "headline-scraper")]
#[command(version = "1.0.0")]
#[command(about = "Scrape news headlines from websites", long_about = None)]
struct Cli {
    /// URL of the news website to scrape
    #[arg(short, long, default_value = DEFAULT_URL)]
    url: String,

    /// Output file name (default: headlines_YYYYMMDD_HHMMSS.txt)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    println!("News Headlines Web Scraper");
    println!("{}", "=".repeat(40));

    match handle_scrape(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_failure(&e);
            println!("No headlines were scraped.");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("headline_scraper=info,warn"),
            1 => EnvFilter::new("headline_scraper=debug,info"),
            2 => EnvFilter::new("headline_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Runs one scrape and prints the preview
async fn handle_scrape(cli: &Cli) -> Result<(), ScrapeError> {
    let scraper = Scraper::new(&Config::default())?;
    let summary = scraper.run(&cli.url, cli.output.as_deref()).await?;

    print_preview(&summary.texts(), &summary.output_path);

    Ok(())
}
