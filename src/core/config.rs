//! # Configuration
//!
//! Override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.octoscope/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OctoscopeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub github: GitHubConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GitHubConfig {
    pub api_root: Option<String>,
    pub web_root: Option<String>,
    pub user_agent: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_ROOT: &str = "https://api.github.com";
pub const DEFAULT_WEB_ROOT: &str = "https://github.com";
pub const DEFAULT_USER_AGENT: &str = "octoscope";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

pub const ENV_API_ROOT: &str = "OCTOSCOPE_API_ROOT";
pub const ENV_WEB_ROOT: &str = "OCTOSCOPE_WEB_ROOT";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_root: String,
    pub web_root: String,
    pub user_agent: String,
    pub log_level: LevelFilter,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.octoscope/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".octoscope").join("config.toml"))
}

/// Load config from `~/.octoscope/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `OctoscopeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<OctoscopeConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(OctoscopeConfig::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<OctoscopeConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(OctoscopeConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: OctoscopeConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Octoscope Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                   # off, error, warn, info, debug, trace

# [github]
# api_root = "https://api.github.com"   # Or set OCTOSCOPE_API_ROOT
# web_root = "https://github.com"       # Or set OCTOSCOPE_WEB_ROOT
# user_agent = "octoscope"
"#;

fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Override values that don't come from the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub env_api_root: Option<String>,
    pub env_web_root: Option<String>,
    pub cli_api_root: Option<String>,
    pub cli_log_level: Option<String>,
}

impl Overrides {
    /// Reads the env layer; CLI values are filled in by the caller.
    pub fn from_env() -> Self {
        Self {
            env_api_root: std::env::var(ENV_API_ROOT).ok(),
            env_web_root: std::env::var(ENV_WEB_ROOT).ok(),
            ..Default::default()
        }
    }
}

/// Collapses defaults → config file → env vars → CLI into concrete values.
pub fn resolve(config: &OctoscopeConfig, overrides: &Overrides) -> ResolvedConfig {
    // API root: CLI → env → config → default
    let api_root = overrides
        .cli_api_root
        .clone()
        .or_else(|| overrides.env_api_root.clone())
        .or_else(|| config.github.api_root.clone())
        .unwrap_or_else(|| DEFAULT_API_ROOT.to_string());

    // Web root: env → config → default
    let web_root = overrides
        .env_web_root
        .clone()
        .or_else(|| config.github.web_root.clone())
        .unwrap_or_else(|| DEFAULT_WEB_ROOT.to_string());

    let user_agent = config
        .github
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

    // Log level: CLI → config → default. Unparseable values fall back.
    let log_level = overrides
        .cli_log_level
        .as_deref()
        .or(config.general.log_level.as_deref())
        .map(|level| {
            level.parse::<LevelFilter>().unwrap_or_else(|_| {
                warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
                DEFAULT_LOG_LEVEL
            })
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        api_root: api_root.trim_end_matches('/').to_string(),
        web_root: web_root.trim_end_matches('/').to_string(),
        user_agent,
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&OctoscopeConfig::default(), &Overrides::default());
        assert_eq!(resolved.api_root, DEFAULT_API_ROOT);
        assert_eq!(resolved.web_root, DEFAULT_WEB_ROOT);
        assert_eq!(resolved.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[github]
web_root = "https://github.example.com/"
"#;
        let config: OctoscopeConfig = toml::from_str(toml_str).unwrap();
        assert!(config.general.log_level.is_none());
        assert!(config.github.api_root.is_none());

        let resolved = resolve(&config, &Overrides::default());
        assert_eq!(resolved.web_root, "https://github.example.com");
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
log_level = "warn"

[github]
api_root = "http://localhost:8080"
web_root = "http://localhost:8081"
user_agent = "octoscope-test"
"#;
        let config: OctoscopeConfig = toml::from_str(toml_str).unwrap();
        let resolved = resolve(&config, &Overrides::default());
        assert_eq!(resolved.api_root, "http://localhost:8080");
        assert_eq!(resolved.web_root, "http://localhost:8081");
        assert_eq!(resolved.user_agent, "octoscope-test");
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_cli_beats_env_beats_file() {
        let config = OctoscopeConfig {
            github: GitHubConfig {
                api_root: Some("http://file".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let env_only = Overrides {
            env_api_root: Some("http://env".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve(&config, &env_only).api_root, "http://env");

        let with_cli = Overrides {
            cli_api_root: Some("http://cli".to_string()),
            ..env_only
        };
        assert_eq!(resolve(&config, &with_cli).api_root, "http://cli");
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let overrides = Overrides {
            cli_log_level: Some("loud".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&OctoscopeConfig::default(), &overrides);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("octoscope-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[github\napi_root = 3").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("octoscope-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        fs::remove_dir_all(&dir).ok();

        let config = load_config_from(&path).unwrap();
        assert!(config.github.api_root.is_none());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("[github]"));

        // The generated file is all comments and parses to defaults.
        let reparsed: OctoscopeConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.github.web_root.is_none());

        fs::remove_dir_all(&dir).ok();
    }
}
