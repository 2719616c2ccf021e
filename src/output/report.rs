//! Text report generation
//!
//! The report is a short header followed by a numbered list:
//!
//! ```text
//! News Headlines Scraped from https://www.bbc.com/news
//! Date: 2024-01-01 09:30:00
//! ================================================================================
//!
//! 1. First headline
//! 2. Second headline
//! ```

use crate::output::{OutputError, OutputResult};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Width of the rule under the report header
const RULE_WIDTH: usize = 80;

/// A finished headline report
#[derive(Debug, Clone)]
pub struct Report {
    /// The scraped page
    pub source_url: String,

    /// Local time the report was generated
    pub generated_at: NaiveDateTime,

    /// Headlines in report order
    pub headlines: Vec<String>,
}

impl Report {
    pub fn new(source_url: &str, generated_at: NaiveDateTime, headlines: Vec<String>) -> Self {
        Self {
            source_url: source_url.to_string(),
            generated_at,
            headlines,
        }
    }
}

/// Default report filename for a given generation time
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use headline_scraper::output::default_report_path;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap().and_hms_opt(9, 5, 1).unwrap();
/// assert_eq!(default_report_path(&at).to_str(), Some("headlines_20240307_090501.txt"));
/// ```
pub fn default_report_path(generated_at: &NaiveDateTime) -> PathBuf {
    PathBuf::from(format!(
        "headlines_{}.txt",
        generated_at.format("%Y%m%d_%H%M%S")
    ))
}

/// Writes a report to `output_path`, replacing any existing file
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_report(report: &Report, output_path: &Path) -> OutputResult<()> {
    let io_error = |source| OutputError::Io {
        path: output_path.to_path_buf(),
        source,
    };

    let file = File::create(output_path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(format_report(report).as_bytes())
        .map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    Ok(())
}

/// Formats a report as text
pub fn format_report(report: &Report) -> String {
    let mut text = String::new();

    text.push_str(&format!("News Headlines Scraped from {}\n", report.source_url));
    text.push_str(&format!(
        "Date: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    text.push_str(&"=".repeat(RULE_WIDTH));
    text.push_str("\n\n");

    for (i, headline) in report.headlines.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, headline));
    }

    text
}
