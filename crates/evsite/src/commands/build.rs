//! Build command implementation.
//!
//! Generates the static site: the homepage, one detail page per event, and
//! the 404 page.

use std::path::{Path, PathBuf};

use evsite_catalog::filter::FilterCriteria;
use evsite_catalog::site::{SiteBuilder, SiteOptions};
use evsite_catalog::Catalog;

use super::config::Config;
use super::{CommandContext, Result};
use crate::output::{format_build_json, format_build_summary};

/// Output directory used when neither `--out` nor `site.out_dir` is set.
const DEFAULT_OUT_DIR: &str = "public";

/// Options for the build command.
#[derive(Debug)]
pub struct BuildOptions {
    /// Output root directory.
    pub out_dir: PathBuf,
    /// Title, description and link prefix.
    pub site: SiteOptions,
    /// Pre-filter for the homepage listing.
    pub criteria: FilterCriteria,
}

impl BuildOptions {
    /// Merges command-line flags over the `[site]` config section.
    pub fn resolve(
        out: Option<&Path>,
        title: Option<&str>,
        base_path: Option<&str>,
        criteria: FilterCriteria,
        config: &Config,
    ) -> Self {
        let defaults = SiteOptions::default();

        let out_dir = out
            .map(Path::to_path_buf)
            .or_else(|| config.site.out_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

        let title = title
            .or(config.site.title.as_deref())
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.title);

        let base_path = base_path
            .or(config.site.base_path.as_deref())
            .map(str::to_string)
            .unwrap_or(defaults.base_path);

        Self {
            out_dir,
            site: SiteOptions {
                title,
                description: config.site.description.clone(),
                base_path,
            },
            criteria,
        }
    }
}

/// Executes the build command.
///
/// # Errors
///
/// Returns an error if an event id cannot be used as a file name or if
/// writing a page fails.
pub async fn execute(ctx: &CommandContext, catalog: &Catalog, opts: &BuildOptions) -> Result<()> {
    if ctx.verbose {
        eprintln!(
            "Building {} event pages into {}...",
            catalog.len(),
            opts.out_dir.display()
        );
    }

    let report = SiteBuilder::new(catalog, opts.site.clone())
        .with_criteria(opts.criteria.clone())
        .build(&opts.out_dir)
        .await?;

    if ctx.json_output {
        let output = format_build_json(&report)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_build_summary(&report, catalog.len(), ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}
