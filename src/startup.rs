// Startup module - banner and module status
//
// `print_startup` runs before the protocol server starts logging to stderr;
// `log_startup` writes the same summary into the TUI log buffer.

use crate::config::{Config, VERSION};
use crate::theme::SheetSource;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Module status for display
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: String,
}

fn module_status(config: &Config, sheet: &SheetSource) -> Vec<ModuleStatus> {
    let sheet_description = match sheet {
        SheetSource::Bundled => "Bundled token sheet".to_string(),
        SheetSource::File(path) => format!("Token sheet {}", path.display()),
    };
    let host_description = match &config.host.addr {
        Some(addr) => format!("Host session {}", addr),
        None => "Host session (standalone)".to_string(),
    };

    vec![
        ModuleStatus {
            name: "tokens",
            enabled: true,
            description: sheet_description,
        },
        ModuleStatus {
            name: "host",
            enabled: config.host.addr.is_some(),
            description: host_description,
        },
        ModuleStatus {
            name: "log-file",
            enabled: config.logging.file_enabled,
            description: format!("JSON logs in {}", config.logging.file_dir.display()),
        },
    ]
}

/// Print the startup banner (server mode)
pub fn print_startup(config: &Config, sheet: &SheetSource) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}Theme Inspector{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Design token viewer and component preview{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    for module in module_status(config, sheet) {
        let (icon, style) = if module.enabled {
            (format!("{GREEN}✓{RESET}"), "")
        } else {
            (format!("{DIM}○{RESET}"), DIM)
        };
        println!(
            "    {icon} {style}{:<10}{RESET} {DIM}{}{RESET}",
            module.name, module.description
        );
    }
    println!();

    println!(
        "  {MAGENTA}▸{RESET} Serving inspect-theme on {BOLD}http://{}/mcp{RESET}",
        config.bind_addr
    );
    println!();
}

/// Startup summary for the TUI log buffer
pub fn log_startup(config: &Config, sheet: &SheetSource) {
    tracing::info!("Theme Inspector v{}", VERSION);
    for module in module_status(config, sheet) {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::info!("{} {} - {}", icon, module.name, module.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_module_status_reflects_config() {
        let mut config = Config::default();
        let modules = module_status(&config, &SheetSource::Bundled);
        assert_eq!(modules[0].description, "Bundled token sheet");
        assert!(!modules[1].enabled);

        config.host.addr = Some("127.0.0.1:9400".to_string());
        let modules = module_status(&config, &SheetSource::File(PathBuf::from("brand.toml")));
        assert_eq!(modules[0].description, "Token sheet brand.toml");
        assert!(modules[1].enabled);
        assert_eq!(modules[1].description, "Host session 127.0.0.1:9400");
    }
}
