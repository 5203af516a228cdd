//! Options command implementation.
//!
//! Prints the values each filter accepts, derived from the dataset.

use evsite_catalog::filter::derive_options;
use evsite_catalog::Catalog;

use super::{CommandContext, Result};
use crate::output::{format_options_json, format_options_table};

/// Executes the options command.
pub fn execute(ctx: &CommandContext, catalog: &Catalog) -> Result<()> {
    let options = derive_options(catalog.events());

    if ctx.json_output {
        let output = format_options_json(&options)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_options_table(&options, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}
