use serde::Deserialize;

/// Browser identity sent with every request; some news sites reject obvious bots
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Page scraped when no URL is given on the command line
pub const DEFAULT_URL: &str = "https://www.bbc.com/news";

/// Main configuration structure for the headline scraper
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub heuristics: HeuristicsConfig,
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FetchConfig {
    /// User-Agent header value
    pub user_agent: String,

    /// Total request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Headline detection heuristics
///
/// Selectors are tried in order, and within a selector matches are taken in
/// document order, so the order of `selectors` decides the order of the report.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HeuristicsConfig {
    /// CSS selectors for likely headline elements
    pub selectors: Vec<String>,

    /// Substrings (matched case-insensitively) that reject a selector match
    pub excluded_terms: Vec<String>,

    /// Selector matches must be strictly longer than this many characters
    pub min_selector_length: usize,

    /// Anchor texts must be strictly longer than this many characters
    pub min_anchor_length: usize,

    /// Anchor texts must have strictly more whitespace-separated words than this
    pub min_anchor_words: usize,

    /// Maximum number of headlines kept
    pub max_headlines: usize,
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        let selectors = [
            "h1",
            "h2",
            "h3",
            ".headline",
            ".title",
            "[data-testid*=\"headline\"]",
            ".gs-c-promo-heading__title",
            ".media__title",
            "a[data-testid=\"internal-link\"] h3",
        ];
        let excluded_terms = ["more", "follow", "watch", "also in", "most watched", "bbc"];

        Self {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            excluded_terms: excluded_terms.iter().map(|s| s.to_string()).collect(),
            min_selector_length: 15,
            min_anchor_length: 20,
            min_anchor_words: 3,
            max_headlines: 50,
        }
    }
}
