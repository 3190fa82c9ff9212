//! Service configuration
//!
//! Settings come from up to four places, resolved per field in a fixed
//! precedence order: command line flags, then environment variables, then
//! an optional `trust-lens.config.yml` file, then built-in defaults. The
//! Gemini API key is the one exception: it is only ever read from the
//! environment so it cannot end up in config files or shell history.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::shared::error::TrustLensError;
use crate::shared::Result;

/// Config file name for auto-discovery in the working directory.
pub const CONFIG_FILENAME: &str = "trust-lens.config.yml";

/// Default listen address. Port 8001 is what the dashboard frontend expects.
pub const DEFAULT_BIND: &str = "0.0.0.0:8001";

/// Default SQLite database file, relative to the working directory.
pub const DEFAULT_DATABASE: &str = "trust_lens.db";

/// Default Gemini model when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Which engine turns gathered reviews into a trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineProvider {
    /// Deterministic lexicon-based scoring with no external calls.
    Lexicon,
    /// Google Gemini via the generative language API.
    Gemini,
}

impl std::str::FromStr for EngineProvider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lexicon" => Ok(EngineProvider::Lexicon),
            "gemini" => Ok(EngineProvider::Gemini),
            _ => Err(format!(
                "Invalid engine: {}. Please specify 'lexicon' or 'gemini'",
                s
            )),
        }
    }
}

impl std::fmt::Display for EngineProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineProvider::Lexicon => write!(f, "lexicon"),
            EngineProvider::Gemini => write!(f, "gemini"),
        }
    }
}

/// Resolved engine settings.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub provider: EngineProvider,
    pub model: String,
    /// Only sourced from `GOOGLE_API_KEY`.
    pub api_key: Option<String>,
}

/// Fully resolved service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind: SocketAddr,
    pub database: PathBuf,
    pub engine: EngineConfig,
}

/// Top-level configuration file structure
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Listen address as HOST:PORT
    pub bind: Option<String>,

    /// SQLite database file path
    pub database: Option<PathBuf>,

    /// Engine provider name ("lexicon" or "gemini")
    pub engine: Option<String>,

    /// Gemini model identifier
    pub gemini_model: Option<String>,

    /// Captures unknown fields for warnings
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Values read from the process environment.
///
/// Kept as a plain struct so resolution can be tested without mutating
/// the real environment.
#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub bind: Option<String>,
    pub database: Option<String>,
    pub engine: Option<String>,
    pub gemini_model: Option<String>,
    pub api_key: Option<String>,
}

impl EnvOverrides {
    /// Reads the `TRUST_LENS_*` variables plus `GOOGLE_API_KEY`.
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            bind: read_env("TRUST_LENS_BIND"),
            database: read_env("TRUST_LENS_DB"),
            engine: read_env("TRUST_LENS_ENGINE"),
            gemini_model: read_env("TRUST_LENS_GEMINI_MODEL"),
            api_key: read_env("GOOGLE_API_KEY"),
        }
    }
}

fn read_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Command line values, which outrank every other source.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub bind: Option<SocketAddr>,
    pub database: Option<PathBuf>,
    pub engine: Option<EngineProvider>,
}

impl ServiceConfig {
    /// Resolves the effective configuration from all sources
    ///
    /// # Arguments
    ///
    /// * `cli` - Values from command line flags
    /// * `env` - Values from the process environment
    /// * `file` - Parsed config file, if one was found
    ///
    /// # Returns
    ///
    /// The resolved configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a source holds an unparseable value, or when
    /// the Gemini engine is selected without `GOOGLE_API_KEY` being set.
    pub fn resolve(cli: CliOverrides, env: EnvOverrides, file: Option<ConfigFile>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let bind = match (cli.bind, env.bind, file.bind) {
            (Some(bind), _, _) => bind,
            (None, Some(raw), _) => parse_bind(&raw, "TRUST_LENS_BIND")?,
            (None, None, Some(raw)) => parse_bind(&raw, "the config file")?,
            (None, None, None) => parse_bind(DEFAULT_BIND, "the built-in default")?,
        };

        let database = cli
            .database
            .or(env.database.map(PathBuf::from))
            .or(file.database)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));

        let provider = match (cli.engine, env.engine, file.engine) {
            (Some(provider), _, _) => provider,
            (None, Some(raw), _) => parse_engine(&raw, "TRUST_LENS_ENGINE")?,
            (None, None, Some(raw)) => parse_engine(&raw, "the config file")?,
            (None, None, None) => EngineProvider::Lexicon,
        };

        let model = env
            .gemini_model
            .or(file.gemini_model)
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        if provider == EngineProvider::Gemini && env.api_key.is_none() {
            return Err(config_error(
                "the gemini engine requires an API key",
                "Set the GOOGLE_API_KEY environment variable, or use --engine lexicon",
            )
            .into());
        }

        Ok(Self {
            bind,
            database,
            engine: EngineConfig {
                provider,
                model,
                api_key: env.api_key,
            },
        })
    }
}

fn parse_bind(raw: &str, source: &str) -> Result<SocketAddr> {
    match raw.parse() {
        Ok(addr) => Ok(addr),
        Err(_) => Err(config_error(
            format!("invalid bind address '{}' from {}", raw, source),
            "Use HOST:PORT, for example 0.0.0.0:8001",
        )
        .into()),
    }
}

fn parse_engine(raw: &str, source: &str) -> Result<EngineProvider> {
    match raw.parse() {
        Ok(provider) => Ok(provider),
        Err(message) => Err(config_error(
            format!("{} (from {})", message, source),
            "Valid engines are 'lexicon' and 'gemini'",
        )
        .into()),
    }
}

fn config_error(message: impl Into<String>, hint: impl Into<String>) -> TrustLensError {
    TrustLensError::Config {
        message: message.into(),
        hint: hint.into(),
    }
}

/// Loads configuration from a specific file path
///
/// # Arguments
///
/// * `path` - Path to the configuration file
///
/// # Returns
///
/// The parsed configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains invalid YAML
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Discovers and loads configuration from a directory
///
/// Looks for `trust-lens.config.yml` in the given directory. Returns
/// `Ok(None)` silently when the file does not exist, since configuration
/// is optional.
///
/// # Arguments
///
/// * `dir` - Directory to search for the configuration file
///
/// # Errors
///
/// Returns an error if a file exists but cannot be read or parsed
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warns about unknown configuration fields
fn warn_unknown_fields(config: &ConfigFile) {
    for field_name in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            field_name
        );
    }
}
