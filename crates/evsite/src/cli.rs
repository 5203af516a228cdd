//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the evsite CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// evsite - Browse an event catalog and generate a static event-listing site
#[derive(Parser, Debug)]
#[command(name = "evsite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to the events dataset (default: from config, then the XDG data dir)
    #[arg(long, global = true, env = "EVSITE_DATA")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Filter flags shared by `list` and `build`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only events in this city (exact match)
    #[arg(long)]
    pub location: Option<String>,

    /// Only events on this date (exact match, as written in the dataset)
    #[arg(long)]
    pub date: Option<String>,

    /// Only events in this category (exact match)
    #[arg(long)]
    pub category: Option<String>,

    /// Search title, description and tags (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Price bucket
    #[arg(long, value_enum)]
    pub price: Option<PriceArg>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List events, optionally filtered
    #[command(alias = "l")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Limit results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show event details
    #[command(alias = "s")]
    Show {
        /// Event ID
        event_id: String,
    },

    /// Show the values available for each filter
    #[command(alias = "o")]
    Options,

    /// Generate the static site
    #[command(alias = "b")]
    Build {
        /// Output directory (default: from config, or "public")
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Site title
        #[arg(long)]
        title: Option<String>,

        /// URL prefix for links (default: relative links)
        #[arg(long)]
        base_path: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// View and edit configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Price buckets accepted by `--price`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceArg {
    /// Free events
    #[value(name = "free")]
    Free,
    /// ₹1 - ₹500
    #[value(name = "0-500")]
    UpTo500,
    /// ₹501 - ₹2000
    #[value(name = "500-2000")]
    UpTo2000,
    /// Above ₹2000
    #[value(name = "2000+")]
    Over2000,
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open config in $EDITOR
    Edit,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // This verifies that the CLI is correctly defined
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["evsite", "--verbose", "list"]);
        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert!(!cli.json);

        let cli = Cli::parse_from(["evsite", "--quiet", "--json", "list"]);
        assert!(!cli.verbose);
        assert!(cli.quiet);
        assert!(cli.json);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["evsite", "--verbose", "--quiet", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_color_flag() {
        let cli = Cli::parse_from(["evsite", "--no-color", "list"]);
        assert!(cli.no_color);
    }

    #[test]
    fn test_data_flag() {
        let cli = Cli::parse_from(["evsite", "--data", "data/events.json", "list"]);
        assert_eq!(cli.data, Some(PathBuf::from("data/events.json")));
    }

    #[test]
    fn test_list_alias() {
        let cli = Cli::parse_from(["evsite", "l"]);
        assert!(matches!(cli.command, Some(Commands::List { .. })));
    }

    #[test]
    fn test_list_filters() {
        let cli = Cli::parse_from([
            "evsite",
            "list",
            "--location",
            "Pune",
            "--date",
            "2025-07-19",
            "--category",
            "Music",
            "-s",
            "jazz",
            "--price",
            "0-500",
            "--limit",
            "5",
        ]);

        let Some(Commands::List { filters, limit }) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(filters.location.as_deref(), Some("Pune"));
        assert_eq!(filters.date.as_deref(), Some("2025-07-19"));
        assert_eq!(filters.category.as_deref(), Some("Music"));
        assert_eq!(filters.search.as_deref(), Some("jazz"));
        assert_eq!(filters.price, Some(PriceArg::UpTo500));
        assert_eq!(limit, Some(5));
    }

    #[test]
    fn test_price_values() {
        for (value, expected) in [
            ("free", PriceArg::Free),
            ("0-500", PriceArg::UpTo500),
            ("500-2000", PriceArg::UpTo2000),
            ("2000+", PriceArg::Over2000),
        ] {
            let cli = Cli::parse_from(["evsite", "list", "--price", value]);
            let Some(Commands::List { filters, .. }) = cli.command else {
                panic!("expected list command");
            };
            assert_eq!(filters.price, Some(expected));
        }
    }

    #[test]
    fn test_price_rejects_unknown_bucket() {
        let result = Cli::try_parse_from(["evsite", "list", "--price", "cheap"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_show_alias() {
        let cli = Cli::parse_from(["evsite", "s", "evt-1"]);
        match cli.command {
            Some(Commands::Show { event_id }) => assert_eq!(event_id, "evt-1"),
            other => panic!("expected show command, got {other:?}"),
        }
    }

    #[test]
    fn test_build_flags() {
        let cli = Cli::parse_from([
            "evsite",
            "build",
            "--out",
            "dist",
            "--title",
            "Pune Events",
            "--location",
            "Pune",
        ]);

        let Some(Commands::Build {
            out,
            title,
            base_path,
            filters,
        }) = cli.command
        else {
            panic!("expected build command");
        };
        assert_eq!(out, Some(PathBuf::from("dist")));
        assert_eq!(title.as_deref(), Some("Pune Events"));
        assert!(base_path.is_none());
        assert_eq!(filters.location.as_deref(), Some("Pune"));
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["evsite", "config", "set", "site.title", "My Events"]);
        match cli.command {
            Some(Commands::Config {
                command: Some(ConfigCommands::Set { key, value }),
            }) => {
                assert_eq!(key, "site.title");
                assert_eq!(value, "My Events");
            }
            other => panic!("expected config set, got {other:?}"),
        }
    }

    #[test]
    fn test_completions_command() {
        let cli = Cli::parse_from(["evsite", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Zsh })
        ));
    }
}
