//! Config command implementation.
//!
//! The config file lives at `$EVSITE_CONFIG`, else
//! `$XDG_CONFIG_HOME/evsite/config.toml`, else `~/.config/evsite/config.toml`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tokio::process::Command;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Highest config schema version this build understands.
const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding the config file path.
const CONFIG_ENV: &str = "EVSITE_CONFIG";

/// Keys accepted by `evsite config set`.
const VALID_KEYS: [&str; 6] = [
    "data_path",
    "output.color",
    "site.title",
    "site.description",
    "site.out_dir",
    "site.base_path",
];

/// Written by `config edit` when no file exists yet.
const DEFAULT_CONFIG: &str = r#"# evsite configuration
version = 1

# Events dataset; --data and EVSITE_DATA take precedence
# data_path = "data/events.json"

[output]
# color = true

[site]
# title = "Events"
# description = "Upcoming events near you"
# out_dir = "public"
# base_path = "/"
"#;

/// Settings read from the config file. Every field is optional.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "current_version")]
    pub version: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub site: SiteConfig,
}

fn current_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data_path: None,
            output: OutputConfig::default(),
            site: SiteConfig::default(),
        }
    }
}

/// `[output]` table.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// `[site]` table: defaults for `evsite build`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
}

/// Resolves the config file path.
pub fn config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    let dir = match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".config"))
            .ok_or_else(|| CommandError::Config("no home directory found".to_string()))?,
    };
    Ok(dir.join("evsite").join("config.toml"))
}

/// Parses config text, rejecting schema versions newer than this build.
fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {e}")))?;

    if config.version > CONFIG_VERSION {
        return Err(CommandError::Config(format!(
            "Config version {} is newer than supported version {}",
            config.version, CONFIG_VERSION
        )));
    }
    Ok(config)
}

/// Loads the config file. A missing file is the default config.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    match fs::read_to_string(&path) {
        Ok(text) => parse_config(&text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(CommandError::Config(format!(
            "Failed to read config '{}': {e}",
            path.display()
        ))),
    }
}

/// Writes `contents` to `path`, creating parent directories.
fn write_config_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| CommandError::Config(format!("Failed to create config directory: {e}")))?;
    }
    fs::write(path, contents)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {e}")))
}

/// Renders the human-readable `config show` listing.
fn format_config(path: &Path, exists: bool, config: &Config) -> String {
    let mut output = format!("File: {}\n", path.display());
    if !exists {
        output.push_str("(not created yet; run 'evsite config edit')\n");
        return output;
    }

    let mut line = |key: &str, value: Option<String>| {
        if let Some(value) = value {
            output.push_str(&format!("  {key} = {value}\n"));
        }
    };
    line("data_path", config.data_path.as_ref().map(|p| p.display().to_string()));
    line("output.color", config.output.color.map(|c| c.to_string()));
    line("site.title", config.site.title.clone());
    line("site.description", config.site.description.clone());
    line("site.out_dir", config.site.out_dir.as_ref().map(|p| p.display().to_string()));
    line("site.base_path", config.site.base_path.clone());
    output
}

/// Executes `config show`.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = config_path()?;
    let exists = path.exists();

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": exists,
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        print!("{}", format_config(&path, exists, &config));
    }
    Ok(())
}

/// Picks the editor from `$EDITOR`, then `$VISUAL`, then `vi`.
fn editor_command() -> String {
    ["EDITOR", "VISUAL"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "vi".to_string())
}

/// Executes `config edit`, seeding the file with commented defaults first.
pub async fn execute_edit(ctx: &CommandContext) -> Result<()> {
    let path = config_path()?;
    if !path.exists() {
        write_config_file(&path, DEFAULT_CONFIG)?;
        if ctx.verbose {
            eprintln!("Created {}", path.display());
        }
    }

    let editor = editor_command();
    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .await
        .map_err(|e| CommandError::Config(format!("Failed to run editor '{editor}': {e}")))?;

    if !status.success() {
        return Err(CommandError::Config(format!("Editor '{editor}' exited with {status}")));
    }
    // Surface syntax errors right away instead of on the next command
    load_config()?;

    if !ctx.quiet && !ctx.json_output {
        println!("Saved {}", path.display());
    }
    Ok(())
}

/// Options for `config set`.
pub struct ConfigSetOptions {
    pub key: String,
    pub value: String,
}

/// Applies one `key = value` assignment.
fn set_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "data_path" => config.data_path = Some(PathBuf::from(value)),
        "output.color" => config.output.color = Some(parse_bool(value)?),
        "site.title" if value.trim().is_empty() => {
            return Err(CommandError::Config("site.title cannot be empty".to_string()));
        }
        "site.title" => config.site.title = Some(value.to_string()),
        "site.description" => config.site.description = Some(value.to_string()),
        "site.out_dir" => config.site.out_dir = Some(PathBuf::from(value)),
        "site.base_path" => config.site.base_path = Some(value.to_string()),
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{key}'. Valid keys: {}",
                VALID_KEYS.join(", ")
            )));
        }
    }
    Ok(())
}

/// Executes `config set`.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    set_value(&mut config, &opts.key, &opts.value)?;

    let path = config_path()?;
    let text = toml::to_string_pretty(&config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {e}")))?;
    write_config_file(&path, &text)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }
    Ok(())
}

/// Executes `config path`.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = config_path()?;
    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }
    Ok(())
}

fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean '{s}' (expected true/false, yes/no, 1/0 or on/off)"
        ))),
    }
}
