//! The criteria record and price buckets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fixed price bucket used by the price filter.
///
/// Bounds are on the extracted numeric price (see [`super::extract_price`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    /// Price is exactly zero.
    #[serde(rename = "free")]
    Free,
    /// `0 < price <= 500`.
    #[serde(rename = "0-500")]
    UpTo500,
    /// `500 < price <= 2000`.
    #[serde(rename = "500-2000")]
    UpTo2000,
    /// `price > 2000`.
    #[serde(rename = "2000+")]
    Over2000,
}

impl PriceRange {
    /// All buckets in the order they are offered to users.
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Free,
        PriceRange::UpTo500,
        PriceRange::UpTo2000,
        PriceRange::Over2000,
    ];

    /// Parses a bucket value such as `"0-500"`.
    ///
    /// Empty and unrecognized values return `None`, which the filter treats as
    /// "no constraint" rather than an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "free" => Some(PriceRange::Free),
            "0-500" => Some(PriceRange::UpTo500),
            "500-2000" => Some(PriceRange::UpTo2000),
            "2000+" => Some(PriceRange::Over2000),
            _ => None,
        }
    }

    /// Returns the wire value of the bucket.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Free => "free",
            PriceRange::UpTo500 => "0-500",
            PriceRange::UpTo2000 => "500-2000",
            PriceRange::Over2000 => "2000+",
        }
    }

    /// Returns the human label shown in the price select.
    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::Free => "Free",
            PriceRange::UpTo500 => "₹1 - ₹500",
            PriceRange::UpTo2000 => "₹500 - ₹2000",
            PriceRange::Over2000 => "₹2000+",
        }
    }

    /// Returns true if the numeric price falls in this bucket.
    pub fn contains(&self, price: u64) -> bool {
        match self {
            PriceRange::Free => price == 0,
            PriceRange::UpTo500 => price > 0 && price <= 500,
            PriceRange::UpTo2000 => price > 500 && price <= 2000,
            PriceRange::Over2000 => price > 2000,
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of active filter values.
///
/// A `None` field places no constraint on the matching event field. The record
/// is immutable in use: the `with_*` methods return a new record, and the
/// hosting view swaps the whole record on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact match against `city`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Exact match against `date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Exact match against `category`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Case-insensitive substring of title, description or any tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
}

/// Maps an empty string to `None`.
fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl FilterCriteria {
    /// Returns a record with the location constraint replaced.
    pub fn with_location(self, location: impl Into<String>) -> Self {
        Self {
            location: non_empty(location),
            ..self
        }
    }

    /// Returns a record with the date constraint replaced.
    pub fn with_date(self, date: impl Into<String>) -> Self {
        Self {
            date: non_empty(date),
            ..self
        }
    }

    /// Returns a record with the category constraint replaced.
    pub fn with_category(self, category: impl Into<String>) -> Self {
        Self {
            category: non_empty(category),
            ..self
        }
    }

    /// Returns a record with the search term replaced.
    pub fn with_search(self, term: impl Into<String>) -> Self {
        Self {
            search_term: non_empty(term),
            ..self
        }
    }

    /// Returns a record with the price bucket replaced.
    pub fn with_price(self, range: Option<PriceRange>) -> Self {
        Self {
            price_range: range,
            ..self
        }
    }

    /// Returns true if no field constrains the result.
    pub fn is_empty(&self) -> bool {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, str::is_empty);
        blank(&self.location)
            && blank(&self.date)
            && blank(&self.category)
            && blank(&self.search_term)
            && self.price_range.is_none()
    }
}
