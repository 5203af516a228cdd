//! Criteria evaluation against events.
//!
//! This module provides the [`FilterEvaluator`] for testing events against a
//! [`FilterCriteria`] record, and [`apply_filters`] for computing the visible
//! subset of a collection.
//!
//! # Example
//!
//! ```
//! use evsite_catalog::filter::{FilterCriteria, FilterEvaluator};
//! use evsite_catalog::Event;
//!
//! let event = Event {
//!     id: "evt-1".to_string(),
//!     title: "Jazz Night".to_string(),
//!     description: "Live jazz by the sea".to_string(),
//!     date: "2025-07-01".to_string(),
//!     time: "19:00 - 23:00".to_string(),
//!     city: "Mumbai".to_string(),
//!     location: "Blue Frog".to_string(),
//!     category: "Music".to_string(),
//!     price: "₹1,250".to_string(),
//!     image: "/images/jazz.jpg".to_string(),
//!     organizer: "Blue Frog".to_string(),
//!     capacity: 250,
//!     tags: vec!["jazz".to_string()],
//! };
//!
//! let criteria = FilterCriteria::default().with_search("JAZZ");
//! let evaluator = FilterEvaluator::new(&criteria);
//! assert!(evaluator.matches(&event));
//! ```

use crate::Event;

use super::criteria::{FilterCriteria, PriceRange};
use super::price::extract_price;

/// Evaluates a criteria record against events.
///
/// Empty strings in the record are treated like absent fields. The search
/// term is lowercased once when the evaluator is built.
#[derive(Debug)]
pub struct FilterEvaluator<'a> {
    location: Option<&'a str>,
    date: Option<&'a str>,
    category: Option<&'a str>,
    search_lower: Option<String>,
    price_range: Option<PriceRange>,
}

/// Returns the value if it is present and non-empty.
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl<'a> FilterEvaluator<'a> {
    /// Creates a new evaluator for the given criteria.
    pub fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            location: active(&criteria.location),
            date: active(&criteria.date),
            category: active(&criteria.category),
            search_lower: active(&criteria.search_term).map(str::to_lowercase),
            price_range: criteria.price_range,
        }
    }

    /// Returns true if the event passes every active constraint.
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_location(event)
            && self.matches_date(event)
            && self.matches_category(event)
            && self.matches_search(event)
            && self.matches_price(event)
    }

    /// Filters a slice of events, returning matches in their original order.
    pub fn filter_events<'b>(&self, events: &'b [Event]) -> Vec<&'b Event> {
        events.iter().filter(|event| self.matches(event)).collect()
    }

    fn matches_location(&self, event: &Event) -> bool {
        self.location.map_or(true, |city| event.city == city)
    }

    fn matches_date(&self, event: &Event) -> bool {
        self.date.map_or(true, |date| event.date == date)
    }

    fn matches_category(&self, event: &Event) -> bool {
        self.category.map_or(true, |category| event.category == category)
    }

    /// Checks title, description and tags for the search term.
    fn matches_search(&self, event: &Event) -> bool {
        let Some(term) = &self.search_lower else {
            return true;
        };

        event.title.to_lowercase().contains(term.as_str())
            || event.description.to_lowercase().contains(term.as_str())
            || event
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(term.as_str()))
    }

    fn matches_price(&self, event: &Event) -> bool {
        self.price_range
            .map_or(true, |range| range.contains(extract_price(&event.price)))
    }
}

/// Returns the events that satisfy every active criterion, in collection order.
///
/// With empty criteria this is the whole collection. The function is pure, so
/// it is safe to call again on every criteria change.
pub fn apply_filters<'a>(events: &'a [Event], criteria: &FilterCriteria) -> Vec<&'a Event> {
    FilterEvaluator::new(criteria).filter_events(events)
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
