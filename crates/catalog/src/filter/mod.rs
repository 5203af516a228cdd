//! Filter engine for the event listing.
//!
//! The engine works on the full, read-only event collection and an explicit
//! [`FilterCriteria`] record. It never mutates either input.
//!
//! # Criteria
//!
//! - `location` - exact match against the event's `city`
//! - `date` - exact match against `date`
//! - `category` - exact match against `category`
//! - `search_term` - case-insensitive substring of `title`, `description`
//!   or any tag
//! - `price_range` - one of `free`, `0-500`, `500-2000`, `2000+`, applied to
//!   the price from [`extract_price`]
//!
//! Absent or empty fields place no constraint. Active fields are ANDed.
//!
//! # Example
//!
//! ```
//! use evsite_catalog::filter::{apply_filters, derive_options, FilterCriteria, PriceRange};
//!
//! let events: Vec<evsite_catalog::Event> = vec![];
//!
//! // Option sets for the select controls
//! let options = derive_options(&events);
//! assert!(options.cities.is_empty());
//!
//! // Visible subset for the current criteria
//! let criteria = FilterCriteria::default().with_price(PriceRange::parse("2000+"));
//! let visible = apply_filters(&events, &criteria);
//! assert!(visible.is_empty());
//! ```

mod criteria;
mod evaluator;
mod options;
mod price;

pub use criteria::{FilterCriteria, PriceRange};
pub use evaluator::{apply_filters, FilterEvaluator};
pub use options::{derive_options, FilterOptions};
pub use price::extract_price;
