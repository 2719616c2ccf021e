use crate::config::types::{Config, FetchConfig, HeuristicsConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_heuristics(&config.heuristics)?;
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates the headline heuristics
fn validate_heuristics(config: &HeuristicsConfig) -> Result<(), ConfigError> {
    if config.selectors.is_empty() {
        return Err(ConfigError::Validation(
            "at least one headline selector is required".to_string(),
        ));
    }

    for selector in &config.selectors {
        parse_selector(selector)?;
    }

    // An empty term is a substring of every text and would reject everything
    if config.excluded_terms.iter().any(|term| term.is_empty()) {
        return Err(ConfigError::Validation(
            "excluded_terms cannot contain empty strings".to_string(),
        ));
    }

    if config.max_headlines < 1 {
        return Err(ConfigError::Validation(format!(
            "max_headlines must be >= 1, got {}",
            config.max_headlines
        )));
    }

    Ok(())
}

/// Parses a CSS selector, mapping failures to a configuration error
pub fn parse_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

/// Validates a target page URL
///
/// Only absolute `http` and `https` URLs can be scraped.
pub fn validate_target_url(target: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(target)
        .map_err(|e| ConfigError::InvalidUrl(format!("'{}': {}", target, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "'{}' must use the http or https scheme",
            target
        )));
    }

    Ok(url)
}
