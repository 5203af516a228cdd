//! Output formatting utilities for the evsite CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by what is being printed:
//!
//! - [`events`] - Event output formatting (list, show)
//! - [`options`] - Filter option sets (options)
//! - [`site`] - Build reports (build)
//! - [`helpers`] - Common formatting utilities (truncation, padding, prices)

mod events;
pub mod helpers;
mod options;
mod site;

pub use events::{
    format_event_details_json, format_event_details_table, format_events_json,
    format_events_table,
};

pub use options::{format_options_json, format_options_table};

pub use site::{format_build_json, format_build_summary};
