//! Common helper functions for output formatting.

use evsite_catalog::filter::extract_price;
use owo_colors::OwoColorize;

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Pads a cell to `width` characters, truncating long values first.
pub fn cell(s: &str, width: usize) -> String {
    let value = truncate_str(s, width);
    let padding = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(padding))
}

/// Formats a price for display. Free events are highlighted.
pub fn format_price(price: &str, width: usize, use_colors: bool) -> String {
    let padded = cell(price, width);
    if use_colors && extract_price(price) == 0 {
        padded.green().to_string()
    } else {
        padded
    }
}

/// Formats tags for display.
pub fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a section label, bold when colors are on.
pub fn label(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
