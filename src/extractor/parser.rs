//! HTML document wrapper used by the headline extractor
//!
//! Parsing is permissive: malformed markup is repaired by the HTML5 parser
//! and never fails. The document is read-only once parsed.

use scraper::{ElementRef, Html, Selector};

/// A parsed, read-only HTML page
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses raw HTML into a document tree
    ///
    /// # Example
    ///
    /// ```
    /// use headline_scraper::extractor::Document;
    ///
    /// let doc = Document::parse("<html><head><title>Test</title></head><body></body></html>");
    /// assert_eq!(doc.title(), Some("Test".to_string()));
    /// ```
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Returns the stripped text of every element matching `selector`, in document order
    pub fn select_text<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = String> + 'a {
        self.html.select(selector).map(visible_text)
    }

    /// Returns the stripped text of every `<a>` element that carries an `href`
    pub fn link_texts(&self) -> Vec<String> {
        match Selector::parse("a[href]") {
            Ok(selector) => self.html.select(&selector).map(visible_text).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Extracts the page title from the `<title>` element
    pub fn title(&self) -> Option<String> {
        let title_selector = Selector::parse("title").ok()?;

        self.html
            .select(&title_selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

/// Visible text of an element
///
/// Each descendant text node is trimmed on its own, empty nodes are dropped and
/// the rest are concatenated without a separator, so `Big <b>News</b>` yields
/// `BigNews` while whitespace inside a single text node is kept.
pub fn visible_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
