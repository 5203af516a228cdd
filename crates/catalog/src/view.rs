//! The listing view: the homepage's criteria state over a catalog.
//!
//! A [`ListingView`] borrows the catalog read-only and owns the current
//! [`FilterCriteria`]. Every change replaces the record wholesale; nothing
//! mutates a field in place. The visible subset is recomputed on demand.

use crate::filter::{apply_filters, derive_options, FilterCriteria, FilterOptions};
use crate::{Catalog, Event};

/// Message shown when the criteria match nothing.
pub const NO_RESULTS_MESSAGE: &str = "No events found matching your criteria.";

/// Filter state for a listing of events.
#[derive(Debug, Clone)]
pub struct ListingView<'a> {
    catalog: &'a Catalog,
    options: FilterOptions,
    criteria: FilterCriteria,
}

impl<'a> ListingView<'a> {
    /// Creates a view with empty criteria, showing the whole catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_criteria(catalog, FilterCriteria::default())
    }

    /// Creates a view with initial criteria.
    pub fn with_criteria(catalog: &'a Catalog, criteria: FilterCriteria) -> Self {
        Self {
            catalog,
            options: derive_options(catalog.events()),
            criteria,
        }
    }

    /// Returns the catalog behind the view.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Returns the option sets for the select controls.
    ///
    /// These come from the full catalog, not the filtered subset.
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Returns the current criteria record.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replaces the criteria record.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Resets every criterion, so the full catalog is visible again.
    pub fn clear(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Computes the events matching the current criteria.
    pub fn visible(&self) -> Vec<&'a Event> {
        apply_filters(self.catalog.events(), &self.criteria)
    }

    /// Returns the "Showing N of M events" line.
    pub fn summary(&self) -> String {
        format_summary(self.visible().len(), self.catalog.len())
    }

    /// Returns true if the current criteria match no events.
    pub fn is_empty_result(&self) -> bool {
        self.visible().is_empty()
    }
}

/// Formats the result count line shown above the listing.
pub fn format_summary(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} events")
}
