//! Show command implementation.
//!
//! Displays the details of a single event, looked up by id.

use evsite_catalog::{Catalog, Event};

use super::{CommandContext, Result};
use crate::output::{format_event_details_json, format_event_details_table};

/// Options for the show command.
#[derive(Debug)]
pub struct ShowOptions {
    /// Event ID.
    pub event_id: String,
}

/// Executes the show command.
///
/// # Errors
///
/// Returns `CommandError::Catalog` with a "Did you mean" suggestion when no
/// event has the given id.
pub fn execute(ctx: &CommandContext, catalog: &Catalog, opts: &ShowOptions) -> Result<()> {
    let event = find_event(catalog, &opts.event_id)?;

    if ctx.json_output {
        let output = format_event_details_json(event)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_event_details_table(event, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

/// Resolves the id, trimming surrounding whitespace.
fn find_event<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Event> {
    Ok(catalog.resolve_event(id.trim())?)
}
