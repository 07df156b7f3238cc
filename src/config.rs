//! Configuration file support for macro-watch.
//!
//! Provides YAML-based configuration through `macro-watch.config.yml` files,
//! environment overrides for the KV credentials, and resolution of the final
//! settings for each command. Precedence: CLI > environment > file > defaults.

use anyhow::bail;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shared::error::WatchError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "macro-watch.config.yml";

/// Address the server binds when nothing else is configured
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Status endpoint `show` reads when nothing else is configured
pub const DEFAULT_STATUS_URL: &str = "http://127.0.0.1:3000/api/status";

const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

const ENV_KV_URL: &str = "KV_REST_API_URL";
const ENV_KV_TOKEN: &str = "KV_REST_API_TOKEN";
const ENV_BIND: &str = "MACRO_WATCH_BIND";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub bind: Option<String>,
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub dashboard: DashboardSection,
    pub alert_threshold: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// `store:` section
#[derive(Debug, Deserialize, Default)]
pub struct StoreSection {
    pub kind: Option<String>,
    pub url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
    pub seed_file: Option<PathBuf>,
}

/// `dashboard:` section
#[derive(Debug, Deserialize, Default)]
pub struct DashboardSection {
    pub status_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Which snapshot store backs the status endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// KV REST API
    Rest,
    /// In-process map, optionally seeded from a file
    Memory,
}

impl std::str::FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rest" | "kv" => Ok(StoreKind::Rest),
            "memory" | "mem" => Ok(StoreKind::Memory),
            _ => Err(format!(
                "Invalid store kind: {}. Please specify 'rest' or 'memory'",
                s
            )),
        }
    }
}

/// Values read from the process environment
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub kv_url: Option<String>,
    pub kv_token: Option<String>,
    pub bind: Option<String>,
}

impl EnvOverrides {
    pub fn from_process() -> Self {
        let read = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            kv_url: read(ENV_KV_URL),
            kv_token: read(ENV_KV_TOKEN),
            bind: read(ENV_BIND),
        }
    }
}

/// Command-line values for `serve`
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub bind: Option<String>,
    pub store: Option<StoreKind>,
    pub seed: Option<PathBuf>,
    pub status_url: Option<String>,
}

/// Command-line values for `show`
#[derive(Debug, Clone, Default)]
pub struct ShowOverrides {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub alert_threshold: Option<u64>,
}

/// Resolved store settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSettings {
    Rest {
        url: String,
        token: String,
        timeout: Duration,
    },
    Memory {
        seed_file: Option<PathBuf>,
    },
}

/// Resolved settings for `serve`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeSettings {
    pub bind: String,
    pub store: StoreSettings,
    /// Dashboard reads this URL instead of the local use case when set
    pub status_url: Option<String>,
    pub status_timeout: Option<Duration>,
}

/// Resolved settings for `show`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSettings {
    pub url: String,
    pub timeout: Option<Duration>,
    pub alert_threshold: Option<u64>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| WatchError::ConfigReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| WatchError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Loads the explicit config, or the discovered one, or defaults
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(dir)?.unwrap_or_default()),
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(kind) = &config.store.kind {
        kind.parse::<StoreKind>()
            .map_err(|message| WatchError::Validation { message })?;
    }
    if config.store.timeout_secs == Some(0) {
        bail!(WatchError::Validation {
            message: "store.timeout_secs must be greater than zero".to_string(),
        });
    }
    if config.dashboard.timeout_secs == Some(0) {
        bail!(WatchError::Validation {
            message: "dashboard.timeout_secs must be greater than zero".to_string(),
        });
    }
    if let Some(url) = &config.dashboard.status_url {
        validate_http_url(url, "dashboard.status_url")?;
    }
    Ok(())
}

fn validate_http_url(url: &str, field: &str) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!(WatchError::Validation {
            message: format!("{} must start with http:// or https:// (got '{}')", field, url),
        });
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
    }
}

impl ServeSettings {
    pub fn resolve(file: &ConfigFile, env: &EnvOverrides, args: &ServeOverrides) -> Result<Self> {
        let bind = args
            .bind
            .clone()
            .or_else(|| env.bind.clone())
            .or_else(|| file.bind.clone())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        let url = env.kv_url.clone().or_else(|| file.store.url.clone());
        let token = env.kv_token.clone().or_else(|| file.store.token.clone());
        let seed_file = args.seed.clone().or_else(|| file.store.seed_file.clone());

        let file_kind = file
            .store
            .kind
            .as_deref()
            .map(str::parse::<StoreKind>)
            .transpose()
            .map_err(|message| WatchError::Validation { message })?;
        let kind = match (args.store, &args.seed, file_kind) {
            (Some(kind), _, _) => kind,
            (None, Some(_), _) => StoreKind::Memory,
            (None, None, Some(kind)) => kind,
            (None, None, None) if url.is_some() => StoreKind::Rest,
            (None, None, None) => StoreKind::Memory,
        };

        let store = match kind {
            StoreKind::Rest => {
                let url = url.ok_or_else(|| WatchError::StoreNotConfigured {
                    reason: "the rest store needs a URL".to_string(),
                    hint: format!("Set {} or store.url in {}", ENV_KV_URL, CONFIG_FILENAME),
                })?;
                validate_http_url(&url, "store.url")?;
                let token = token.ok_or_else(|| WatchError::StoreNotConfigured {
                    reason: "the rest store needs an API token".to_string(),
                    hint: format!("Set {} or store.token in {}", ENV_KV_TOKEN, CONFIG_FILENAME),
                })?;
                let timeout = Duration::from_secs(
                    file.store.timeout_secs.unwrap_or(DEFAULT_STORE_TIMEOUT_SECS),
                );
                StoreSettings::Rest {
                    url,
                    token,
                    timeout,
                }
            }
            StoreKind::Memory => StoreSettings::Memory { seed_file },
        };

        let status_url = args
            .status_url
            .clone()
            .or_else(|| file.dashboard.status_url.clone());
        if let Some(url) = &status_url {
            validate_http_url(url, "status URL")?;
        }

        Ok(Self {
            bind,
            store,
            status_url,
            status_timeout: file.dashboard.timeout_secs.map(Duration::from_secs),
        })
    }
}

impl ShowSettings {
    pub fn resolve(file: &ConfigFile, args: &ShowOverrides) -> Result<Self> {
        let url = args
            .url
            .clone()
            .or_else(|| file.dashboard.status_url.clone())
            .unwrap_or_else(|| DEFAULT_STATUS_URL.to_string());
        validate_http_url(&url, "status URL")?;

        let timeout_secs = args.timeout_secs.or(file.dashboard.timeout_secs);
        if timeout_secs == Some(0) {
            bail!(WatchError::Validation {
                message: "timeout must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            url,
            timeout: timeout_secs.map(Duration::from_secs),
            alert_threshold: args.alert_threshold.or(file.alert_threshold),
        })
    }
}
