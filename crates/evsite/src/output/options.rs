//! Filter option output formatting.

use evsite_catalog::filter::{FilterOptions, PriceRange};
use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output for one price bucket.
#[derive(Serialize)]
pub struct PriceOutput {
    pub value: &'static str,
    pub label: &'static str,
}

/// JSON output structure for the options command.
#[derive(Serialize)]
pub struct OptionsOutput<'a> {
    #[serde(flatten)]
    pub options: &'a FilterOptions,
    pub prices: Vec<PriceOutput>,
}

/// Formats option sets as JSON.
pub fn format_options_json(options: &FilterOptions) -> Result<String, serde_json::Error> {
    let prices = PriceRange::ALL
        .iter()
        .map(|r| PriceOutput {
            value: r.as_str(),
            label: r.label(),
        })
        .collect();

    serde_json::to_string_pretty(&OptionsOutput { options, prices })
}

fn push_group(output: &mut String, title: &str, values: &[String], use_colors: bool) {
    let heading = format!("{title} ({}):", values.len());
    if use_colors {
        output.push_str(&format!("{}\n", heading.bold()));
    } else {
        output.push_str(&heading);
        output.push('\n');
    }
    for value in values {
        output.push_str(&format!("  {value}\n"));
    }
}

/// Formats option sets as text, one group per filter.
pub fn format_options_table(options: &FilterOptions, use_colors: bool) -> String {
    let mut output = String::new();
    push_group(&mut output, "Locations", &options.cities, use_colors);
    output.push('\n');
    push_group(&mut output, "Dates", &options.dates, use_colors);
    output.push('\n');
    push_group(&mut output, "Categories", &options.categories, use_colors);
    output.push('\n');

    let prices: Vec<String> = PriceRange::ALL
        .iter()
        .map(|r| format!("{:<10} {}", r.as_str(), r.label()))
        .collect();
    push_group(&mut output, "Prices", &prices, use_colors);

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> FilterOptions {
        FilterOptions {
            cities: vec!["Mumbai".to_string(), "Pune".to_string()],
            dates: vec!["2025-07-19".to_string()],
            categories: vec!["Music".to_string()],
        }
    }

    #[test]
    fn test_options_table() {
        let output = format_options_table(&options(), false);
        assert!(output.starts_with("Locations (2):\n  Mumbai\n  Pune\n"));
        assert!(output.contains("Dates (1):\n  2025-07-19\n"));
        assert!(output.contains("Prices (4):\n"));
        assert!(output.contains("  2000+      ₹2000+\n"));
    }

    #[test]
    fn test_options_json() {
        let json = format_options_json(&options()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["cities"][1], "Pune");
        assert_eq!(value["categories"][0], "Music");
        assert_eq!(value["prices"][0]["value"], "free");
        assert_eq!(value["prices"][3]["label"], "₹2000+");
    }
}
