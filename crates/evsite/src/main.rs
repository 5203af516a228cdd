use clap::Parser;
use std::process::ExitCode;

use evsite_catalog::site::SiteError;
use evsite_catalog::{CatalogError, CatalogStore, CatalogStoreError};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{resolve_data_path, CommandContext, CommandError};
use dispatch::{DataCommand, DataDispatch, NoDataCommand, NoDataDispatch};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(text) => eprintln!("{text}"),
                    Err(_) => eprintln!("{error_json}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise the level follows `--verbose`/`--quiet`.
fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .try_init();
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let mut ctx = CommandContext::from_cli(cli);

    // Config edit spawns an editor, so it runs on the async path
    if dispatch::is_config_edit(cli) {
        return commands::config::execute_edit(&ctx).await;
    }

    if let Some(dispatch) = NoDataDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx);
    }

    let config = load_config()?;
    ctx.apply_config(&config);

    let Some(dispatch) = DataDispatch::from_cli(cli) else {
        return Ok(());
    };

    let path = resolve_data_path(cli.data.as_deref(), &config)?;
    if ctx.verbose {
        eprintln!("Loading events from {}...", path.display());
    }
    let catalog = CatalogStore::with_path(path).load_async().await?;

    dispatch.execute(&ctx, &catalog, &config).await
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Catalog(CatalogError::NotFound { .. }) => "NOT_FOUND",
        CommandError::Catalog(_) => "CATALOG_ERROR",
        CommandError::Store(_) => "DATA_ERROR",
        CommandError::Site(_) => "SITE_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the process exit status for an error.
fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Catalog(CatalogError::NotFound { .. }) => 4,
        CommandError::Catalog(_) => 5,
        CommandError::Store(CatalogStoreError::ReadError { .. }) => 3,
        CommandError::Store(_) => 5,
        CommandError::Site(SiteError::UnsafeId { .. }) => 5,
        CommandError::Site(_) => 3,
        CommandError::Config(_) => 5,
        CommandError::Io(_) => 3,
        CommandError::Json(_) => 1,
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    ExitCode::from(exit_status(e))
}
