//! Configuration for the theme inspector
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/theme-inspector/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;


pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_BIND: &str = "127.0.0.1:8765";

pub const ENV_BIND: &str = "THEME_INSPECTOR_BIND";
pub const ENV_TOKENS: &str = "THEME_INSPECTOR_TOKENS";
pub const ENV_HOST: &str = "THEME_INSPECTOR_HOST";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the protocol server binds to
    pub bind_addr: SocketAddr,

    /// Custom token sheet; the bundled sheet is used when unset
    pub token_sheet: Option<PathBuf>,

    /// Host session settings
    pub host: HostConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8765)),
            token_sheet: None,
            host: HostConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Host session settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostConfig {
    /// Host address (host:port); no host means standalone
    pub addr: Option<String>,

    /// Give up on the handshake after this many seconds; unset waits forever
    pub handshake_timeout_secs: Option<u64>,
}

impl HostConfig {
    pub fn handshake_timeout(&self) -> Option<Duration> {
        self.handshake_timeout_secs.map(Duration::from_secs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub bind_addr: Option<String>,
    pub token_sheet: Option<String>,

    /// Optional [host] section
    pub host: Option<FileHost>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// Host settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileHost {
    pub addr: Option<String>,
    pub handshake_timeout_secs: Option<u64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/theme-inspector/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| {
            p.join(".config")
                .join("theme-inspector")
                .join("config.toml")
        })
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// Exits the process when the file exists but cannot be read or parsed:
    /// running on defaults while the user edits the wrong thing is worse.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Token sheet paths written without quotes");
                    eprintln!("    - Typos in section names ([host], [logging])\n");
                    eprintln!("  To reset, run `theme-inspector config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Result<Self> {
        let file = Self::load_file_config();
        Self::merge(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with environment lookups (env wins)
    pub(crate) fn merge(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Empty env values count as unset
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        // Bind address: env > file > default
        let bind = env(ENV_BIND)
            .or(file.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", bind))?;

        // Token sheet: env > file > bundled
        let token_sheet = env(ENV_TOKENS).or(file.token_sheet).map(PathBuf::from);

        // Host: addr env > file; timeout file only
        let file_host = file.host.unwrap_or_default();
        let host = HostConfig {
            addr: env(ENV_HOST).or(file_host.addr),
            handshake_timeout_secs: file_host.handshake_timeout_secs,
        };

        let logging = LoggingConfig::from_file(file.logging);

        Ok(Self {
            bind_addr,
            token_sheet,
            host,
            logging,
        })
    }
}
