//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sponsor-board/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::drag::{DEFAULT_TAP_THRESHOLD, Point};
use crate::core::proxy::{DAMPING_RANGE, ProxySettings, STIFFNESS_RANGE, clamp_or};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub board: BoardSection,
    #[serde(default)]
    pub proxy: ProxySection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BoardSection {
    pub tap_threshold: Option<f64>,
    pub roster_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProxySection {
    pub offset_x: Option<i32>,
    pub offset_y: Option<i32>,
    pub wobble: Option<bool>,
    pub stiffness: Option<f64>,
    pub damping: Option<f64>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub roster: Option<PathBuf>,
    pub tap_threshold: Option<f64>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub tap_threshold: f64,
    /// None = use the built-in roster.
    pub roster_file: Option<PathBuf>,
    pub proxy: ProxySettings,
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

/// Returns `~/.sponsor-board/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sponsor-board"))
}

/// Returns the path to `~/.sponsor-board/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.sponsor-board/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BoardConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BoardConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BoardConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BoardConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<BoardConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Sponsor Board Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [board]
# tap_threshold = 5.0             # cells; shorter press-release moves open the detail panel
# roster_file = "sponsors.json"   # JSON array of sponsors, relative to ~/.sponsor-board/

# [proxy]
# offset_x = -12                  # proxy position relative to the pointer
# offset_y = -1
# wobble = true
# stiffness = 300.0
# damping = 30.0
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
pub fn resolve(config: &BoardConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup.
pub fn resolve_with_env<F>(config: &BoardConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Tap threshold: CLI → env → config → default
    let env_threshold = env("SPONSOR_BOARD_TAP_THRESHOLD").and_then(|raw| match raw.parse::<f64>() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("Ignoring SPONSOR_BOARD_TAP_THRESHOLD={:?}: {}", raw, e);
            None
        }
    });
    let tap_threshold = cli
        .tap_threshold
        .or(env_threshold)
        .or(config.board.tap_threshold)
        .map(valid_threshold)
        .unwrap_or(DEFAULT_TAP_THRESHOLD);

    // Roster: CLI path as given; env and config paths relative to the config dir
    let roster_file = cli.roster.clone().or_else(|| {
        env("SPONSOR_BOARD_ROSTER")
            .or_else(|| config.board.roster_file.clone())
            .map(|file| relative_to_config_dir(&file))
    });

    let defaults = ProxySettings::default();
    let proxy = ProxySettings {
        offset: Point::new(
            config.proxy.offset_x.unwrap_or(defaults.offset.x),
            config.proxy.offset_y.unwrap_or(defaults.offset.y),
        ),
        wobble: config.proxy.wobble.unwrap_or(defaults.wobble),
        stiffness: config
            .proxy
            .stiffness
            .map_or(defaults.stiffness, |v| valid_spring("stiffness", v, STIFFNESS_RANGE, defaults.stiffness)),
        damping: config
            .proxy
            .damping
            .map_or(defaults.damping, |v| valid_spring("damping", v, DAMPING_RANGE, defaults.damping)),
    };

    ResolvedConfig {
        tap_threshold,
        roster_file,
        proxy,
    }
}

fn valid_threshold(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!("Invalid tap threshold {}, using {}", value, DEFAULT_TAP_THRESHOLD);
        DEFAULT_TAP_THRESHOLD
    }
}

fn valid_spring(name: &str, value: f64, range: (f64, f64), default: f64) -> f64 {
    let clamped = clamp_or(value, range, default);
    if clamped != value {
        warn!("Proxy {} {} out of range, using {}", name, value, clamped);
    }
    clamped
}

fn relative_to_config_dir(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}
