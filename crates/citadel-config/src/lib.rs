//! Shared configuration for the citadel TUI.
//!
//! A small TOML file plus `CITADEL_*` environment variables; the
//! binary's CLI flags override both at the edge. Precedence:
//! CLI > environment > file > defaults.

use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

// ── Failure modes ───────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("bad value for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("could not assemble configuration: {0}")]
    Figment(Box<figment::Error>),
}

// Boxed by hand; figment's error is large and thiserror's #[from]
// cannot box for us.
impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Catalog API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://rickandmortyapi.com/api").expect("default API URL is valid")
}

fn default_timeout() -> u64 {
    30
}

// ── File location ───────────────────────────────────────────────────

/// Where `citadel.toml` lives: the platform config dir, with a
/// `~/.config/citadel` fallback when the platform lookup fails.
pub fn config_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "citadel", "citadel") {
        return dirs.config_dir().join("citadel.toml");
    }
    home_config_dir().join("citadel.toml")
}

fn home_config_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config").join("citadel")
}

// ── Loading ─────────────────────────────────────────────────────────

/// Assemble the full Config: defaults, then the TOML file, then
/// `CITADEL_*` environment variables.
pub fn load_config() -> Result<Config, ConfigError> {
    let config: Config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("CITADEL_"))
        .extract()?;
    validate(&config)?;
    Ok(config)
}

/// Load config, falling back to defaults on any failure.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation {
            field: "timeout_secs".into(),
            reason: "must be nonzero".into(),
        });
    }
    Ok(())
}
