//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands fall into two groups: those that work without the events dataset
//! (config, completions, help) and those that need the loaded catalog.

use evsite_catalog::Catalog;

use crate::cli::{Cli, Commands, ConfigCommands, FilterArgs, Shell};
use crate::commands::config::Config;
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that run without loading the dataset.
pub trait NoDataCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that operate on the loaded catalog.
#[allow(async_fn_in_trait)]
pub trait DataCommand {
    /// Execute the command against the catalog.
    async fn execute(&self, ctx: &CommandContext, catalog: &Catalog, config: &Config)
        -> Result<()>;
}

/// Commands that don't need the dataset.
pub enum NoDataDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> NoDataDispatch<'a> {
    /// Try to create a no-data dispatch from the CLI command.
    /// Returns None if the command needs the dataset.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl NoDataCommand for NoDataDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("evsite - event listing site generator");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch the synchronous config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
        Some(ConfigCommands::Edit) => Err(CommandError::Config(
            "edit must be run through the async dispatcher".into(),
        )),
    }
}

/// Returns true for `config edit`, which spawns an editor and must run async.
pub fn is_config_edit(cli: &Cli) -> bool {
    matches!(
        &cli.command,
        Some(Commands::Config {
            command: Some(ConfigCommands::Edit)
        })
    )
}

/// Commands that need the dataset.
pub enum DataDispatch<'a> {
    List {
        filters: &'a FilterArgs,
        limit: Option<usize>,
    },
    Show {
        event_id: &'a str,
    },
    Options,
    Build {
        out: Option<&'a std::path::Path>,
        title: Option<&'a str>,
        base_path: Option<&'a str>,
        filters: &'a FilterArgs,
    },
}

impl<'a> DataDispatch<'a> {
    /// Create a data dispatch from the CLI command.
    /// Returns None for commands handled by [`NoDataDispatch`].
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::List { filters, limit }) => Some(Self::List {
                filters,
                limit: *limit,
            }),
            Some(Commands::Show { event_id }) => Some(Self::Show { event_id }),
            Some(Commands::Options) => Some(Self::Options),
            Some(Commands::Build {
                out,
                title,
                base_path,
                filters,
            }) => Some(Self::Build {
                out: out.as_deref(),
                title: title.as_deref(),
                base_path: base_path.as_deref(),
                filters,
            }),
            Some(Commands::Config { .. }) | Some(Commands::Completions { .. }) | None => None,
        }
    }
}

impl DataCommand for DataDispatch<'_> {
    async fn execute(
        &self,
        ctx: &CommandContext,
        catalog: &Catalog,
        config: &Config,
    ) -> Result<()> {
        match self {
            Self::List { filters, limit } => {
                let opts = commands::list::ListOptions {
                    criteria: filters.to_criteria(),
                    limit: *limit,
                };
                commands::list::execute(ctx, catalog, &opts)
            }
            Self::Show { event_id } => {
                let opts = commands::show::ShowOptions {
                    event_id: (*event_id).to_string(),
                };
                commands::show::execute(ctx, catalog, &opts)
            }
            Self::Options => commands::options::execute(ctx, catalog),
            Self::Build {
                out,
                title,
                base_path,
                filters,
            } => {
                let opts = commands::build::BuildOptions::resolve(
                    *out,
                    *title,
                    *base_path,
                    filters.to_criteria(),
                    config,
                );
                commands::build::execute(ctx, catalog, &opts).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_no_data_dispatch_config_show() {
        let cli = Cli::parse_from(["evsite", "config", "show"]);
        let dispatch = NoDataDispatch::try_from_cli(&cli);
        assert!(matches!(dispatch, Some(NoDataDispatch::Config(_))));
    }

    #[test]
    fn test_no_data_dispatch_completions() {
        let cli = Cli::parse_from(["evsite", "completions", "zsh"]);
        let dispatch = NoDataDispatch::try_from_cli(&cli);
        assert!(matches!(dispatch, Some(NoDataDispatch::Completions(_))));
    }

    #[test]
    fn test_no_data_dispatch_help() {
        let cli = Cli::parse_from(["evsite"]);
        let dispatch = NoDataDispatch::try_from_cli(&cli);
        assert!(matches!(dispatch, Some(NoDataDispatch::Help)));
    }

    #[test]
    fn test_no_data_dispatch_returns_none_for_list() {
        let cli = Cli::parse_from(["evsite", "list"]);
        assert!(NoDataDispatch::try_from_cli(&cli).is_none());
    }

    #[test]
    fn test_data_dispatch_list() {
        let cli = Cli::parse_from(["evsite", "list", "--location", "Pune", "--limit", "3"]);
        match DataDispatch::from_cli(&cli) {
            Some(DataDispatch::List { filters, limit }) => {
                assert_eq!(filters.location.as_deref(), Some("Pune"));
                assert_eq!(limit, Some(3));
            }
            _ => panic!("expected list dispatch"),
        }
    }

    #[test]
    fn test_data_dispatch_show_and_options() {
        let cli = Cli::parse_from(["evsite", "show", "evt-1"]);
        assert!(matches!(
            DataDispatch::from_cli(&cli),
            Some(DataDispatch::Show { event_id: "evt-1" })
        ));

        let cli = Cli::parse_from(["evsite", "options"]);
        assert!(matches!(
            DataDispatch::from_cli(&cli),
            Some(DataDispatch::Options)
        ));
    }

    #[test]
    fn test_data_dispatch_build() {
        let cli = Cli::parse_from(["evsite", "b", "--out", "dist"]);
        match DataDispatch::from_cli(&cli) {
            Some(DataDispatch::Build { out, title, .. }) => {
                assert_eq!(out, Some(std::path::Path::new("dist")));
                assert!(title.is_none());
            }
            _ => panic!("expected build dispatch"),
        }
    }

    #[test]
    fn test_data_dispatch_returns_none_for_config() {
        let cli = Cli::parse_from(["evsite", "config", "show"]);
        assert!(DataDispatch::from_cli(&cli).is_none());
    }

    #[test]
    fn test_is_config_edit() {
        assert!(is_config_edit(&Cli::parse_from(["evsite", "config", "edit"])));
        assert!(!is_config_edit(&Cli::parse_from(["evsite", "config", "path"])));
        assert!(!is_config_edit(&Cli::parse_from(["evsite", "list"])));
    }
}
