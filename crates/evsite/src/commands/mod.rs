//! Command implementations for the evsite CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod build;
pub mod completions;
pub mod config;
pub mod list;
pub mod options;
pub mod show;

use std::path::{Path, PathBuf};

use evsite_catalog::filter::{FilterCriteria, PriceRange};
use evsite_catalog::site::SiteError;
use evsite_catalog::{CatalogError, CatalogStore, CatalogStoreError};

use crate::cli::{Cli, FilterArgs, PriceArg};
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Lookup error (unknown event id).
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Dataset loading error.
    #[error("data error: {0}")]
    Store(#[from] CatalogStoreError),

    /// Site generation error.
    #[error("site error: {0}")]
    Site(#[from] SiteError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }

    /// Applies output preferences from the config file.
    ///
    /// `--no-color` always wins; `output.color = false` turns colors off too.
    pub fn apply_config(&mut self, config: &Config) {
        if config.output.color == Some(false) {
            self.use_colors = false;
        }
    }
}

/// Resolves the dataset path: `--data`/`EVSITE_DATA`, then `data_path` from
/// the config file, then the default XDG data path.
pub fn resolve_data_path(flag: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = &config.data_path {
        return Ok(path.clone());
    }
    Ok(CatalogStore::default_path()?)
}

impl From<PriceArg> for PriceRange {
    fn from(arg: PriceArg) -> Self {
        match arg {
            PriceArg::Free => PriceRange::Free,
            PriceArg::UpTo500 => PriceRange::UpTo500,
            PriceArg::UpTo2000 => PriceRange::UpTo2000,
            PriceArg::Over2000 => PriceRange::Over2000,
        }
    }
}

impl FilterArgs {
    /// Builds the criteria record from the filter flags.
    pub fn to_criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::default().with_price(self.price.map(PriceRange::from));
        if let Some(location) = &self.location {
            criteria = criteria.with_location(location.as_str());
        }
        if let Some(date) = &self.date {
            criteria = criteria.with_date(date.as_str());
        }
        if let Some(category) = &self.category {
            criteria = criteria.with_category(category.as_str());
        }
        if let Some(search) = &self.search {
            criteria = criteria.with_search(search.as_str());
        }
        criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_data_path_flag_wins() {
        let config = Config {
            data_path: Some(PathBuf::from("/from/config.json")),
            ..Config::default()
        };
        let path = resolve_data_path(Some(Path::new("/from/flag.json")), &config).unwrap();
        assert_eq!(path, PathBuf::from("/from/flag.json"));
    }

    #[test]
    fn test_resolve_data_path_from_config() {
        let config = Config {
            data_path: Some(PathBuf::from("/from/config.json")),
            ..Config::default()
        };
        let path = resolve_data_path(None, &config).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.json"));
    }

    #[test]
    fn test_resolve_data_path_default() {
        let path = resolve_data_path(None, &Config::default()).unwrap();
        assert!(path.ends_with("events.json"));
    }

    #[test]
    fn test_filter_args_to_criteria() {
        let args = FilterArgs {
            location: Some("Pune".to_string()),
            date: None,
            category: Some(String::new()),
            search: Some("jazz".to_string()),
            price: Some(PriceArg::Over2000),
        };
        let criteria = args.to_criteria();

        assert_eq!(criteria.location.as_deref(), Some("Pune"));
        assert!(criteria.date.is_none());
        // Empty values mean no constraint
        assert!(criteria.category.is_none());
        assert_eq!(criteria.search_term.as_deref(), Some("jazz"));
        assert_eq!(criteria.price_range, Some(PriceRange::Over2000));
    }

    #[test]
    fn test_empty_filter_args() {
        assert!(FilterArgs::default().to_criteria().is_empty());
    }

    #[test]
    fn test_apply_config_disables_colors() {
        let mut ctx = CommandContext {
            json_output: false,
            use_colors: true,
            quiet: false,
            verbose: false,
        };
        let mut config = Config::default();
        ctx.apply_config(&config);
        assert!(ctx.use_colors);

        config.output.color = Some(false);
        ctx.apply_config(&config);
        assert!(!ctx.use_colors);
    }
}
