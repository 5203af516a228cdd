//! Option sets for the filter controls.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::Event;

/// Distinct values available for each exact-match filter field.
///
/// Each list is sorted ascending (byte-wise lexical order) with no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub dates: Vec<String>,
    pub categories: Vec<String>,
}

/// Collects the distinct values of one field in sorted order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Derives the location, date and category option sets from the collection.
pub fn derive_options(events: &[Event]) -> FilterOptions {
    FilterOptions {
        cities: distinct(events.iter().map(|e| e.city.as_str())),
        dates: distinct(events.iter().map(|e| e.date.as_str())),
        categories: distinct(events.iter().map(|e| e.category.as_str())),
    }
}
