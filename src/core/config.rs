//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.arena/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ArenaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub sports_base_url: Option<String>,
    pub chat_timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";
pub const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub sports_base_url: String,
    pub chat_timeout: Duration,
    pub data_dir: PathBuf,
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

/// Returns `~/.arena/`.
pub fn arena_home() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".arena"))
}

/// Returns the path to `~/.arena/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    arena_home().map(|h| h.join("config.toml"))
}

/// Load config from `~/.arena/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ArenaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ArenaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ArenaConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ArenaConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<ArenaConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ArenaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Arena Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_dir = "/home/me/.arena/data"      # Or set ARENA_DATA_DIR

# [api]
# base_url = "http://localhost:3000/api/v1"   # Or set ARENA_API_URL
# sports_base_url = "https://example.com/api/v1"  # Or set ARENA_SPORTS_API_URL
# chat_timeout_secs = 10                 # Or set ARENA_CHAT_TIMEOUT_SECS
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Values read from the environment, gathered up front so resolution stays testable.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub api_base_url: Option<String>,
    pub sports_base_url: Option<String>,
    pub data_dir: Option<String>,
    pub chat_timeout_secs: Option<u64>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        let chat_timeout_secs = std::env::var("ARENA_CHAT_TIMEOUT_SECS").ok().and_then(|v| {
            v.parse()
                .inspect_err(|e| warn!("Ignoring ARENA_CHAT_TIMEOUT_SECS={v}: {e}"))
                .ok()
        });
        Self {
            api_base_url: std::env::var("ARENA_API_URL").ok(),
            sports_base_url: std::env::var("ARENA_SPORTS_API_URL").ok(),
            data_dir: std::env::var("ARENA_DATA_DIR").ok(),
            chat_timeout_secs,
        }
    }
}

/// CLI flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub api_base_url: Option<String>,
    pub data_dir: Option<PathBuf>,
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ArenaConfig, env: &EnvOverrides, cli: &CliOverrides) -> ResolvedConfig {
    // API base URL: CLI → env → config → default
    let api_base_url = cli
        .api_base_url
        .clone()
        .or_else(|| env.api_base_url.clone())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let api_base_url = api_base_url.trim_end_matches('/').to_string();

    // Sports base URL: env → config → API base URL
    let sports_base_url = env
        .sports_base_url
        .clone()
        .or_else(|| config.api.sports_base_url.clone())
        .map(|u| u.trim_end_matches('/').to_string())
        .unwrap_or_else(|| api_base_url.clone());

    let chat_timeout = Duration::from_secs(
        env.chat_timeout_secs
            .or(config.api.chat_timeout_secs)
            .unwrap_or(DEFAULT_CHAT_TIMEOUT_SECS),
    );

    // Data dir: CLI → env → config → ~/.arena/data → ./.arena-data
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| env.data_dir.clone().map(PathBuf::from))
        .or_else(|| config.general.data_dir.clone().map(PathBuf::from))
        .or_else(|| arena_home().map(|h| h.join("data")))
        .unwrap_or_else(|| PathBuf::from(".arena-data"));

    ResolvedConfig {
        api_base_url,
        sports_base_url,
        chat_timeout,
        data_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ArenaConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.general.data_dir.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&ArenaConfig::default(), &EnvOverrides::default(), &CliOverrides::default());
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.sports_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.chat_timeout, Duration::from_secs(DEFAULT_CHAT_TIMEOUT_SECS));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ArenaConfig {
            general: GeneralConfig {
                data_dir: Some("/tmp/arena".to_string()),
            },
            api: ApiConfig {
                base_url: Some("http://10.0.0.5:3000/api/v1/".to_string()),
                sports_base_url: Some("https://sports.example.com/api/v1".to_string()),
                chat_timeout_secs: Some(3),
            },
        };
        let resolved = resolve(&config, &EnvOverrides::default(), &CliOverrides::default());
        assert_eq!(resolved.api_base_url, "http://10.0.0.5:3000/api/v1");
        assert_eq!(resolved.sports_base_url, "https://sports.example.com/api/v1");
        assert_eq!(resolved.chat_timeout, Duration::from_secs(3));
        assert_eq!(resolved.data_dir, PathBuf::from("/tmp/arena"));
    }

    #[test]
    fn test_env_beats_file_and_cli_beats_env() {
        let config = ArenaConfig {
            api: ApiConfig {
                base_url: Some("http://file".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = EnvOverrides {
            api_base_url: Some("http://env".to_string()),
            data_dir: Some("/env/data".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&config, &env, &CliOverrides::default());
        assert_eq!(resolved.api_base_url, "http://env");
        assert_eq!(resolved.data_dir, PathBuf::from("/env/data"));

        let cli = CliOverrides {
            api_base_url: Some("http://cli".to_string()),
            data_dir: Some(PathBuf::from("/cli/data")),
        };
        let resolved = resolve(&config, &env, &cli);
        assert_eq!(resolved.api_base_url, "http://cli");
        assert_eq!(resolved.data_dir, PathBuf::from("/cli/data"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[api]
chat_timeout_secs = 20
"#;
        let config: ArenaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.chat_timeout_secs, Some(20));
        assert!(config.api.base_url.is_none());
        assert!(config.general.data_dir.is_none());
    }

    #[test]
    fn test_load_config_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        generate_default_config(&path);
        let config = load_config_from(&path).unwrap();
        assert!(config.api.base_url.is_none());
    }
}
