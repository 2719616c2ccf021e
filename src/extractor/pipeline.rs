//! End-to-end scrape of a single page
//!
//! The pipeline is strictly linear: fetch the page, extract headlines, write
//! the report. There are no retries; the first failure ends the run.

use crate::config::{validate, validate_target_url, Config};
use crate::extractor::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::extractor::headlines::{Headline, HeadlineExtractor};
use crate::output::{default_report_path, write_report, Report};
use crate::ScrapeError;
use chrono::Local;
use reqwest::Client;
use std::path::{Path, PathBuf};

/// Outcome of a successful scrape
#[derive(Debug, Clone)]
pub struct ScrapeSummary {
    /// The page that was scraped
    pub url: String,

    /// Accepted headlines, in report order
    pub headlines: Vec<Headline>,

    /// Where the report was written
    pub output_path: PathBuf,
}

impl ScrapeSummary {
    /// Headline texts in report order
    pub fn texts(&self) -> Vec<String> {
        self.headlines.iter().map(|h| h.text.clone()).collect()
    }
}

/// Headline scraper with a configured HTTP client and compiled heuristics
pub struct Scraper {
    client: Client,
    extractor: HeadlineExtractor,
}

impl Scraper {
    /// Creates a new scraper instance
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Configuration is valid and the client was built
    /// * `Err(ScrapeError)` - Invalid configuration or client construction failure
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        validate(config)?;
        let client = build_http_client(&config.fetch)?;
        let extractor = HeadlineExtractor::new(&config.heuristics)?;
        Ok(Self { client, extractor })
    }

    /// Scrapes headlines from `url` and writes the report
    ///
    /// When `output` is `None` the report goes to
    /// `headlines_YYYYMMDD_HHMMSS.txt` in the current directory.
    ///
    /// # Errors
    ///
    /// Each failure kind is a distinct [`ScrapeError`] variant. No report file
    /// is created unless headlines were found.
    pub async fn run(&self, url: &str, output: Option<&Path>) -> Result<ScrapeSummary, ScrapeError> {
        validate_target_url(url)?;
        tracing::info!(%url, "Scraping headlines");

        let body = match fetch_url(&self.client, url).await {
            FetchResult::Success {
                final_url,
                status_code,
                body,
            } => {
                tracing::debug!(%final_url, status_code, bytes = body.len(), "Fetched page");
                body
            }
            FetchResult::HttpError { status_code } => {
                return Err(ScrapeError::BadStatus {
                    url: url.to_string(),
                    status: status_code,
                });
            }
            FetchResult::NetworkError { error, kind } => {
                tracing::debug!(%kind, "Request failed");
                return Err(ScrapeError::Network {
                    url: url.to_string(),
                    reason: error,
                });
            }
        };

        let collection = self.extractor.extract_from_html(&body);
        if collection.is_empty() {
            return Err(ScrapeError::NoHeadlines {
                url: url.to_string(),
            });
        }

        // Stamped once the page is in hand; the default filename shares it
        let generated_at = Local::now().naive_local();
        let output_path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_report_path(&generated_at));

        let report = Report::new(url, generated_at, collection.texts());
        write_report(&report, &output_path)?;

        tracing::info!(
            count = collection.len(),
            path = %output_path.display(),
            "Saved headlines"
        );

        Ok(ScrapeSummary {
            url: url.to_string(),
            headlines: collection.into_headlines(),
            output_path,
        })
    }

    /// Fail-soft variant of [`Scraper::run`]
    ///
    /// Every failure is logged and absorbed; the caller only sees the
    /// (possibly empty) list of headline texts.
    pub async fn run_soft(&self, url: &str, output: Option<&Path>) -> Vec<String> {
        match self.run(url, output).await {
            Ok(summary) => summary.texts(),
            Err(e) => {
                log_failure(&e);
                Vec::new()
            }
        }
    }
}

/// Logs a scrape failure at the level matching its severity
pub fn log_failure(error: &ScrapeError) {
    match error {
        ScrapeError::NoHeadlines { .. } => tracing::warn!("{}", error),
        _ => tracing::error!("{}", error),
    }
}

/// Builds a scraper from `config` and runs it once, absorbing every failure
///
/// # Example
///
/// ```no_run
/// use headline_scraper::config::{Config, DEFAULT_URL};
/// use headline_scraper::extractor::scrape_headlines;
///
/// # async fn demo() {
/// let headlines = scrape_headlines(&Config::default(), DEFAULT_URL, None).await;
/// println!("found {} headlines", headlines.len());
/// # }
/// ```
pub async fn scrape_headlines(config: &Config, url: &str, output: Option<&Path>) -> Vec<String> {
    match Scraper::new(config) {
        Ok(scraper) => scraper.run_soft(url, output).await,
        Err(e) => {
            log_failure(&e);
            Vec::new()
        }
    }
}
