//! Headline extraction heuristics
//!
//! Extraction runs two passes over a parsed [`Document`], appending into a
//! single ordered, duplicate-free [`HeadlineCollection`]:
//!
//! 1. **Selector pass**: every configured CSS selector, in order, and every
//!    match in document order. Text must be longer than the minimum selector
//!    length and must not contain an excluded term.
//! 2. **Anchor pass**: every `<a href>` in document order. Text must be longer
//!    than the minimum anchor length, look like a sentence and have enough
//!    words.
//!
//! The collection is then truncated to the configured maximum.

use crate::config::{parse_selector, HeuristicsConfig};
use crate::extractor::parser::Document;
use crate::ConfigError;
use regex::Regex;
use scraper::Selector;
use std::collections::HashSet;

/// Pattern anchor text must contain to be considered sentence-like:
/// an uppercase letter, a lowercase letter, and a later lowercase letter.
pub const SENTENCE_SHAPE_PATTERN: &str = r"[A-Z][a-z].*[a-z]";

/// Which pass accepted a headline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlineSource {
    /// Matched a configured CSS selector
    Selector(String),
    /// Accepted by the anchor-text heuristic
    Anchor,
}

/// An accepted headline and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub text: String,
    pub source: HeadlineSource,
}

/// Ordered set of headlines, first occurrence wins
#[derive(Debug, Clone, Default)]
pub struct HeadlineCollection {
    headlines: Vec<Headline>,
    seen: HashSet<String>,
}

impl HeadlineCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a headline with exactly this text is already present
    pub fn contains(&self, text: &str) -> bool {
        self.seen.contains(text)
    }

    /// Appends a headline unless its text is already present
    ///
    /// Returns whether the headline was added.
    pub fn push(&mut self, text: String, source: HeadlineSource) -> bool {
        if self.seen.contains(&text) {
            return false;
        }
        self.seen.insert(text.clone());
        self.headlines.push(Headline { text, source });
        true
    }

    /// Keeps only the first `max` headlines
    pub fn truncate(&mut self, max: usize) {
        if self.headlines.len() <= max {
            return;
        }
        for dropped in self.headlines.drain(max..) {
            self.seen.remove(&dropped.text);
        }
    }

    pub fn len(&self) -> usize {
        self.headlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Headline> {
        self.headlines.iter()
    }

    /// Headline texts in collection order
    pub fn texts(&self) -> Vec<String> {
        self.iter().map(|h| h.text.clone()).collect()
    }

    pub fn into_headlines(self) -> Vec<Headline> {
        self.headlines
    }
}

/// Headline extractor with pre-compiled selectors and pattern
pub struct HeadlineExtractor {
    selectors: Vec<(String, Selector)>,
    excluded_terms: Vec<String>,
    sentence_shape: Regex,
    min_selector_length: usize,
    min_anchor_length: usize,
    min_anchor_words: usize,
    max_headlines: usize,
}

impl HeadlineExtractor {
    /// Compiles the heuristics into an extractor
    ///
    /// # Returns
    ///
    /// * `Ok(HeadlineExtractor)` - All selectors parsed
    /// * `Err(ConfigError)` - A selector is not valid CSS
    pub fn new(config: &HeuristicsConfig) -> Result<Self, ConfigError> {
        let selectors = config
            .selectors
            .iter()
            .map(|raw| parse_selector(raw).map(|selector| (raw.clone(), selector)))
            .collect::<Result<Vec<_>, _>>()?;

        let sentence_shape = Regex::new(SENTENCE_SHAPE_PATTERN)
            .map_err(|e| ConfigError::Validation(format!("invalid headline pattern: {}", e)))?;

        Ok(Self {
            selectors,
            excluded_terms: config
                .excluded_terms
                .iter()
                .map(|term| term.to_lowercase())
                .collect(),
            sentence_shape,
            min_selector_length: config.min_selector_length,
            min_anchor_length: config.min_anchor_length,
            min_anchor_words: config.min_anchor_words,
            max_headlines: config.max_headlines,
        })
    }

    /// Runs both passes and truncates the result
    pub fn extract(&self, document: &Document) -> HeadlineCollection {
        let mut collection = HeadlineCollection::new();

        self.selector_pass(document, &mut collection);
        let from_selectors = collection.len();

        self.anchor_pass(document, &mut collection);
        let from_anchors = collection.len() - from_selectors;

        collection.truncate(self.max_headlines);

        tracing::debug!(
            from_selectors,
            from_anchors,
            kept = collection.len(),
            "Headline extraction finished"
        );

        collection
    }

    /// Parses raw HTML and extracts headlines from it
    pub fn extract_from_html(&self, html: &str) -> HeadlineCollection {
        let document = Document::parse(html);
        if let Some(title) = document.title() {
            tracing::debug!(%title, "Parsed page");
        }
        self.extract(&document)
    }

    /// Appends selector matches that pass the selector heuristic
    pub fn selector_pass(&self, document: &Document, collection: &mut HeadlineCollection) {
        for (raw, selector) in &self.selectors {
            for text in document.select_text(selector) {
                if collection.contains(&text) || !self.accepts_selector_text(&text) {
                    continue;
                }
                tracing::trace!(selector = %raw, %text, "Accepted selector headline");
                collection.push(text, HeadlineSource::Selector(raw.clone()));
            }
        }
    }

    /// Appends link texts that pass the anchor heuristic
    pub fn anchor_pass(&self, document: &Document, collection: &mut HeadlineCollection) {
        for text in document.link_texts() {
            if collection.contains(&text) || !self.accepts_anchor_text(&text) {
                continue;
            }
            tracing::trace!(%text, "Accepted anchor headline");
            collection.push(text, HeadlineSource::Anchor);
        }
    }

    /// Selector heuristic: long enough and free of excluded terms
    pub fn accepts_selector_text(&self, text: &str) -> bool {
        if text.chars().count() <= self.min_selector_length {
            return false;
        }
        let lowered = text.to_lowercase();
        !self
            .excluded_terms
            .iter()
            .any(|term| lowered.contains(term.as_str()))
    }

    /// Anchor heuristic: long, sentence-shaped and multi-word
    pub fn accepts_anchor_text(&self, text: &str) -> bool {
        text.chars().count() > self.min_anchor_length
            && self.sentence_shape.is_match(text)
            && text.split_whitespace().count() > self.min_anchor_words
    }
}
