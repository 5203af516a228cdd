//! List command implementation.
//!
//! Lists events from the dataset, optionally filtered by location, date,
//! category, search term and price bucket.

use evsite_catalog::filter::{FilterCriteria, FilterEvaluator};
use evsite_catalog::{Catalog, Event};

use super::{CommandContext, Result};
use crate::output::{format_events_json, format_events_table};

/// Options for the list command.
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Filter criteria built from the flags.
    pub criteria: FilterCriteria,
    /// Limit results.
    pub limit: Option<usize>,
}

/// Executes the list command.
///
/// # Arguments
///
/// * `ctx` - Command context with output settings
/// * `catalog` - The loaded event collection
/// * `opts` - List command options
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(ctx: &CommandContext, catalog: &Catalog, opts: &ListOptions) -> Result<()> {
    let matched = filter_events(catalog, &opts.criteria);
    let matched_count = matched.len();
    let events = apply_limit(matched, opts.limit);

    if ctx.verbose {
        eprintln!(
            "{} of {} events match {}",
            matched_count,
            catalog.len(),
            describe_criteria(&opts.criteria)
        );
    }

    if ctx.json_output {
        let output = format_events_json(&events, catalog.len(), matched_count)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_events_table(&events, catalog.len(), ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

/// Filters events based on the provided criteria, keeping dataset order.
fn filter_events<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a Event> {
    FilterEvaluator::new(criteria).filter_events(catalog.events())
}

/// Truncates the result list to `limit` entries.
fn apply_limit(mut events: Vec<&Event>, limit: Option<usize>) -> Vec<&Event> {
    if let Some(limit) = limit {
        events.truncate(limit);
    }
    events
}

/// Renders the active criteria for verbose output.
fn describe_criteria(criteria: &FilterCriteria) -> String {
    if criteria.is_empty() {
        return "no filters".to_string();
    }

    let mut parts = Vec::new();
    if let Some(location) = &criteria.location {
        parts.push(format!("location={location}"));
    }
    if let Some(date) = &criteria.date {
        parts.push(format!("date={date}"));
    }
    if let Some(category) = &criteria.category {
        parts.push(format!("category={category}"));
    }
    if let Some(term) = &criteria.search_term {
        parts.push(format!("search={term:?}"));
    }
    if let Some(range) = criteria.price_range {
        parts.push(format!("price={range}"));
    }
    parts.join(", ")
}
