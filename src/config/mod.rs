//! Configuration module for the headline scraper
//!
//! The built-in defaults reproduce the stock headline heuristics. Embedding
//! callers can substitute selectors and exclusions per target site by loading
//! a TOML file instead.
//!
//! # Example
//!
//! ```no_run
//! use headline_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("heuristics.toml")).unwrap();
//! println!("Keeping at most {} headlines", config.heuristics.max_headlines);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, HeuristicsConfig, DEFAULT_URL, DEFAULT_USER_AGENT};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::{parse_selector, validate, validate_target_url};
