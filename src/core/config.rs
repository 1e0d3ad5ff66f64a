//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.faqnav/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::core::search::{DEFAULT_THRESHOLD, normalize_threshold};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FaqnavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Catalog file path or http(s) URL.
    pub catalog: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    pub threshold: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShareConfig {
    pub reset_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost/";
pub const DEFAULT_SHARE_RESET_MS: u64 = 2000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` means the built-in demo catalog.
    pub catalog: Option<String>,
    pub base_url: Url,
    pub search_threshold: f64,
    pub share_reset: Duration,
}

/// Values given on the command line; `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub catalog: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.faqnav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".faqnav").join("config.toml"))
}

/// Load config from `~/.faqnav/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FaqnavConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FaqnavConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FaqnavConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FaqnavConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: FaqnavConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# faqnav configuration
# All settings are optional. Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog = "~/faq/catalog.json"          # Or an http(s) URL. Env: FAQNAV_CATALOG
# base_url = "https://help.example.com/"  # Origin used for shared links. Env: FAQNAV_BASE_URL

# [search]
# threshold = 0.7                         # 0.0 - 1.0, titles scoring below are hidden

# [share]
# reset_ms = 2000                         # How long the "Copied" indicator stays on
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FaqnavConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &FaqnavConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Catalog: CLI → env → config → builtin
    let catalog = cli
        .catalog
        .clone()
        .or_else(|| env("FAQNAV_CATALOG"))
        .or_else(|| config.general.catalog.clone());

    // Base URL: CLI → env → config → default
    let raw_base = cli
        .base_url
        .clone()
        .or_else(|| env("FAQNAV_BASE_URL"))
        .or_else(|| config.general.base_url.clone());
    let base_url = match raw_base.as_deref().map(Url::parse) {
        Some(Ok(url)) => url,
        Some(Err(e)) => {
            warn!("Ignoring invalid base_url {:?}: {}", raw_base, e);
            default_base_url()
        }
        None => default_base_url(),
    };

    let search_threshold =
        normalize_threshold(config.search.threshold.unwrap_or(DEFAULT_THRESHOLD));

    ResolvedConfig {
        catalog,
        base_url,
        search_threshold,
        share_reset: Duration::from_millis(config.share.reset_ms.unwrap_or(DEFAULT_SHARE_RESET_MS)),
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}
