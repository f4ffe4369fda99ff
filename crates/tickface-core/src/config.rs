use crate::error::{Error, Result};
use crate::state::Mode;
use serde::Deserialize;
use std::path::PathBuf;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TICKFACE_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (recommended default)
/// 4. ~/.config/tickface (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: TICKFACE_CONFIG environment variable
    if let Ok(env_path) = std::env::var("TICKFACE_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: Platform config directory
    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("tickface").join("config.toml"));
    }

    // Priority 4: Fallback for systems without a config directory
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".config/tickface/config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Startup preferences. Everything is optional; command-line flags win over
/// whatever is set here.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Face to open on.
    #[serde(default)]
    pub start_mode: Option<Mode>,

    #[serde(default)]
    pub timer: TimerConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct TimerConfig {
    /// Countdown preset, as `MM:SS` or a number of seconds.
    #[serde(default)]
    pub initial: Option<String>,
}

impl Config {
    /// Load from `path`, treating a missing file as an empty config.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
