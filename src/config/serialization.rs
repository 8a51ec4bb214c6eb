//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// TOML basic string with quotes and backslashes escaped
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        let token_sheet = match &self.token_sheet {
            Some(path) => format!("token_sheet = {}", quoted(&path.display().to_string())),
            None => "# token_sheet = \"~/.config/theme-inspector/tokens.toml\"".to_string(),
        };
        let host_addr = match &self.host.addr {
            Some(addr) => format!("addr = {}", quoted(addr)),
            None => "# addr = \"127.0.0.1:9400\"".to_string(),
        };
        let handshake_timeout = match self.host.handshake_timeout_secs {
            Some(secs) => format!("handshake_timeout_secs = {}", secs),
            None => "# handshake_timeout_secs = 10".to_string(),
        };

        format!(
            r#"# theme-inspector configuration

# Protocol server bind address (theme-inspector serve)
bind_addr = {bind}

# Token sheet with local default values (bundled sheet when unset)
# Print the bundled one with: theme-inspector sheet
{token_sheet}

# Host session (terminal inspector). Without an address it runs standalone.
[host]
{host_addr}
# Unset waits for the handshake indefinitely
{handshake_timeout}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# JSON file logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = {log_file_rotation}  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            bind = quoted(&self.bind_addr.to_string()),
            token_sheet = token_sheet,
            host_addr = host_addr,
            handshake_timeout = handshake_timeout,
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.display().to_string()),
            log_file_rotation = quoted(self.logging.file_rotation.as_str()),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }

    /// Write the current configuration to the config file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }
}
