//! Event catalog for the evsite static event-listing site.
//!
//! This crate holds the immutable event collection loaded from a JSON dataset,
//! the filter engine that computes the visible subset for a set of criteria,
//! the listing view that hosts the criteria record, and the HTML renderer for
//! the generated homepage and detail pages.
//!
//! # Example
//!
//! ```
//! use evsite_catalog::filter::{apply_filters, FilterCriteria, PriceRange};
//! use evsite_catalog::Catalog;
//!
//! let catalog = Catalog::from_events(vec![]).unwrap();
//! let criteria = FilterCriteria::default()
//!     .with_location("Pune")
//!     .with_price(Some(PriceRange::Free));
//!
//! let visible = apply_filters(catalog.events(), &criteria);
//! assert!(visible.is_empty());
//! ```

use std::collections::HashMap;

mod event;
pub mod filter;
mod lookups;
pub mod site;
mod store;
pub mod view;

pub use event::Event;
pub use lookups::lookup_by_id;
pub use store::{CatalogStore, CatalogStoreError};

use lookups::{find_similar_id, format_not_found_error};

/// Errors raised while building or querying a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two records in the dataset share an id.
    #[error("duplicate event id '{id}'")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },

    /// A record in the dataset has a blank id.
    #[error("event at position {index} has an empty id")]
    EmptyId {
        /// Zero-based position of the record in the dataset.
        index: usize,
    },

    /// No event with the requested id exists.
    #[error("{}", format_not_found_error(id, suggestion.as_deref()))]
    NotFound {
        /// The id that was looked up.
        id: String,
        /// The closest existing id, if any is near enough.
        suggestion: Option<String>,
    },
}

/// Result type for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// The full, immutable event collection.
///
/// Events keep the order they had in the dataset. An id index is built once
/// at construction so detail lookups don't scan the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    events: Vec<Event>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, checking that every id is present and unique.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyId` for a blank id and
    /// `CatalogError::DuplicateId` for a repeated one.
    pub fn from_events(events: Vec<Event>) -> CatalogResult<Self> {
        let mut by_id = HashMap::with_capacity(events.len());

        for (index, event) in events.iter().enumerate() {
            if event.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if by_id.insert(event.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: event.id.clone(),
                });
            }
        }

        Ok(Self { events, by_id })
    }

    /// Returns all events in dataset order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the catalog has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Looks up an event by its exact id.
    ///
    /// Returns `None` when no event matches.
    pub fn lookup_by_id(&self, id: &str) -> Option<&Event> {
        self.by_id.get(id).map(|&i| &self.events[i])
    }

    /// Looks up an event by id, turning a miss into a `NotFound` error that
    /// carries the closest existing id as a suggestion.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no event has the given id.
    pub fn resolve_event(&self, id: &str) -> CatalogResult<&Event> {
        self.lookup_by_id(id).ok_or_else(|| CatalogError::NotFound {
            id: id.to_string(),
            suggestion: find_similar_id(id, self.events.iter().map(|e| e.id.as_str())),
        })
    }
}
