//! Extractor module for headline scraping
//!
//! This module contains the scraping pipeline, including:
//! - HTTP fetching with a browser-like identity
//! - HTML parsing into a read-only document
//! - Selector and anchor-text headline heuristics
//! - Overall run coordination

mod fetcher;
mod headlines;
mod parser;
mod pipeline;

pub use fetcher::{build_http_client, fetch_url, FetchResult, NetworkFailure};
pub use headlines::{
    Headline, HeadlineCollection, HeadlineExtractor, HeadlineSource, SENTENCE_SHAPE_PATTERN,
};
pub use parser::{visible_text, Document};
pub use pipeline::{log_failure, scrape_headlines, ScrapeSummary, Scraper};
