//! Operator-facing console output

use std::path::Path;

/// Number of headlines shown in the console preview
pub const PREVIEW_LIMIT: usize = 10;

/// Formats the console preview of the first headlines
pub fn format_preview(headlines: &[String], output_path: &Path) -> String {
    let mut text = String::new();

    text.push_str("\nTop Headlines:\n");
    text.push_str(&"-".repeat(40));
    text.push('\n');
    for (i, headline) in headlines.iter().take(PREVIEW_LIMIT).enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, headline));
    }
    text.push_str(&format!("\nFull list saved to: {}", output_path.display()));

    text
}

/// Prints the console preview
pub fn print_preview(headlines: &[String], output_path: &Path) {
    println!("{}", format_preview(headlines, output_path));
}
