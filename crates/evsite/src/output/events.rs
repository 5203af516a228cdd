//! Event output formatting.

use evsite_catalog::filter::extract_price;
use evsite_catalog::view::{format_summary, NO_RESULTS_MESSAGE};
use evsite_catalog::Event;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{cell, format_price, format_tags, label};

const ID_WIDTH: usize = 24;
const DATE_WIDTH: usize = 10;
const CITY_WIDTH: usize = 12;
const CATEGORY_WIDTH: usize = 12;
const PRICE_WIDTH: usize = 10;

/// JSON output structure for list command.
#[derive(Serialize)]
pub struct ListOutput<'a> {
    pub events: &'a [&'a Event],
    /// Size of the whole collection.
    pub total: usize,
    /// Events matching the criteria, before `--limit`.
    pub matched: usize,
    /// Events in `events`.
    pub shown: usize,
}

/// JSON output structure for event details (show command).
#[derive(Serialize)]
pub struct EventDetailsOutput<'a> {
    #[serde(flatten)]
    pub event: &'a Event,
    pub display_date: String,
    pub starts: &'a str,
    pub ends: Option<&'a str>,
    pub price_value: u64,
}

/// Formats a list result as JSON.
pub fn format_events_json(
    events: &[&Event],
    total: usize,
    matched: usize,
) -> Result<String, serde_json::Error> {
    let output = ListOutput {
        events,
        total,
        matched,
        shown: events.len(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats events as a table followed by the summary line.
pub fn format_events_table(events: &[&Event], total: usize, use_colors: bool) -> String {
    if events.is_empty() {
        return format!("{NO_RESULTS_MESSAGE}\n");
    }

    let mut output = String::new();

    let header = format!(
        "{} {} {} {} {} {}",
        cell("ID", ID_WIDTH),
        cell("Date", DATE_WIDTH),
        cell("City", CITY_WIDTH),
        cell("Category", CATEGORY_WIDTH),
        cell("Price", PRICE_WIDTH),
        "Title"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for event in events {
        let line = format!(
            "{} {} {} {} {} {}",
            cell(&event.id, ID_WIDTH),
            cell(&event.date, DATE_WIDTH),
            cell(&event.city, CITY_WIDTH),
            cell(&event.category, CATEGORY_WIDTH),
            format_price(&event.price, PRICE_WIDTH, use_colors),
            event.title
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    let summary = format_summary(events.len(), total);
    if use_colors {
        output.push_str(&format!("\n{}\n", summary.dimmed()));
    } else {
        output.push_str(&format!("\n{summary}\n"));
    }

    output
}

/// Formats event details as JSON (show command).
pub fn format_event_details_json(event: &Event) -> Result<String, serde_json::Error> {
    let (starts, ends) = event.time_range();
    let output = EventDetailsOutput {
        event,
        display_date: event.display_date(),
        starts,
        ends,
        price_value: extract_price(&event.price),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats event details as human-readable text (show command).
pub fn format_event_details_table(event: &Event, use_colors: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", label("Event:", use_colors), event.title));
    output.push_str(&format!("ID: {}\n", event.id));
    output.push_str(&format!("Category: {}\n", event.category));
    output.push_str(&format!("Date: {}\n", event.display_date()));

    let (starts, ends) = event.time_range();
    match ends {
        Some(ends) => output.push_str(&format!("Time: {starts} to {ends}\n")),
        None => output.push_str(&format!("Time: {starts}\n")),
    }

    output.push_str(&format!("Where: {}, {}\n", event.location, event.city));
    output.push_str(&format!("Price: {}\n", event.price.trim()));
    output.push_str(&format!("Organizer: {}\n", event.organizer));
    output.push_str(&format!("Capacity: {} people\n", event.capacity));

    if !event.tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", format_tags(&event.tags)));
    }

    if !event.description.is_empty() {
        output.push_str("Description:\n");
        for line in event.description.lines() {
            output.push_str(&format!("  {line}\n"));
        }
    }

    output
}
