//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "sommario";
const DEFAULT_TOC_LABEL: &str = "Table of contents";

/// Command-line arguments for the sommario binary.
#[derive(Debug, Parser)]
#[command(
    name = "sommario",
    version,
    about = "Render article outlines as navigable table-of-contents fragments"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "SOMMARIO_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Render a section manifest into a table-of-contents fragment.
    Render(RenderArgs),
    /// Validate a section manifest without rendering it.
    Check(CheckArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    /// Path to the section manifest (TOML or JSON).
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub manifest: PathBuf,

    /// Write the rendered fragment to this file instead of stdout.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: SettingsOverrides,
}

#[derive(Debug, Args, Clone)]
pub struct CheckArgs {
    /// Path to the section manifest (TOML or JSON).
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub manifest: PathBuf,

    #[command(flatten)]
    pub overrides: SettingsOverrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct SettingsOverrides {
    /// Override the accessible label on the rendered outline container.
    #[arg(long = "label", value_name = "TEXT")]
    pub toc_label: Option<String>,

    /// Override the logging level (trace, debug, info, warn, error, off).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON instead of the compact format.
    #[arg(
        long = "log-json",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub log_json: Option<bool>,
}

/// Settings exactly as deserialized from files and the environment,
/// before CLI overrides and validation.
#[derive(Debug, Default, Deserialize)]
pub struct RawSettings {
    #[serde(default)]
    pub toc: RawTocSettings,
    #[serde(default)]
    pub logging: RawLoggingSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawTocSettings {
    pub label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLoggingSettings {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl RawSettings {
    /// Load raw settings from the default config locations, an optional
    /// explicit file, and `SOMMARIO_*` environment variables.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
            .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path.to_path_buf()));
        }

        builder
            .add_source(Environment::with_prefix("SOMMARIO").separator("__"))
            .build()
            .map_err(ConfigError::Load)?
            .try_deserialize()
            .map_err(ConfigError::Load)
    }

    /// CLI flags take precedence over anything loaded from files or env.
    pub fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if let Some(label) = &overrides.toc_label {
            self.toc.label = Some(label.clone());
        }
        if let Some(level) = &overrides.log_level {
            self.logging.level = Some(level.clone());
        }
        if overrides.log_json == Some(true) {
            self.logging.format = Some("json".to_string());
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub toc: TocSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct TocSettings {
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[source] config::ConfigError),
    #[error("invalid logging level `{value}`")]
    InvalidLogLevel { value: String },
    #[error("invalid logging format `{value}`; expected `compact` or `json`")]
    InvalidLogFormat { value: String },
    #[error("toc label must not be empty")]
    EmptyTocLabel,
}

impl Settings {
    pub fn from_raw(raw: RawSettings) -> Result<Self, ConfigError> {
        let label = raw
            .toc
            .label
            .unwrap_or_else(|| DEFAULT_TOC_LABEL.to_string());
        if label.trim().is_empty() {
            return Err(ConfigError::EmptyTocLabel);
        }

        let level = match raw.logging.level {
            Some(value) => value
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::InvalidLogLevel { value })?,
            None => LevelFilter::INFO,
        };

        let format = match raw.logging.format.map(|value| value.to_ascii_lowercase()) {
            None => LogFormat::Compact,
            Some(value) if value == "compact" => LogFormat::Compact,
            Some(value) if value == "json" => LogFormat::Json,
            Some(value) => return Err(ConfigError::InvalidLogFormat { value }),
        };

        Ok(Self {
            toc: TocSettings { label },
            logging: LoggingSettings { level, format },
        })
    }
}

#[cfg(test)]
mod tests;
