// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - tui: interactive terminal inspector (default)
// - render: one-shot snapshot as HTML or plain text
// - serve: protocol server exposing the inspect-theme tool
// - config: show / locate / reset / edit the config file
// - sheet: print the token sheet in use

use crate::config::{Config, VERSION};
use crate::controller::{Tab, ViewController};
use crate::host::HostContext;
use crate::render::terminal::render_lines;
use crate::render::{HtmlTarget, MemoryTarget};
use crate::theme::{Environment, SheetSource, ThemeMode, TokenSheet};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Theme Inspector - design token viewer and component preview
#[derive(Parser)]
#[command(name = "theme-inspector")]
#[command(version = VERSION)]
#[command(about = "Inspect design tokens and preview components", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive terminal inspector (default)
    Tui {
        /// Host address to connect to (overrides config)
        #[arg(long)]
        host: Option<String>,
    },

    /// Render one snapshot and exit
    Render {
        /// Tab to render
        #[arg(long, default_value = "variables", value_parser = parse_tab)]
        tab: Tab,

        /// Theme to render (applied after --context)
        #[arg(long, value_parser = parse_theme)]
        theme: Option<ThemeMode>,

        /// Host context JSON file, applied like a host push
        #[arg(long)]
        context: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Serve the inspect-theme tool and its UI resource
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        bind: Option<SocketAddr>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Print the token sheet in use as TOML
    Sheet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Html,
    Text,
}

fn parse_tab(value: &str) -> Result<Tab, String> {
    Tab::ALL
        .into_iter()
        .find(|tab| tab.as_str().eq_ignore_ascii_case(value))
        .ok_or_else(|| format!("unknown tab '{}' (expected variables or preview)", value))
}

fn parse_theme(value: &str) -> Result<ThemeMode, String> {
    ThemeMode::parse(value)
        .ok_or_else(|| format!("unknown theme '{}' (expected light or dark)", value))
}

// ─────────────────────────────────────────────────────────────────────────────
// render
// ─────────────────────────────────────────────────────────────────────────────

/// Options for a one-shot render
pub struct RenderOptions {
    pub tab: Tab,
    pub theme: Option<ThemeMode>,
    pub context: Option<HostContext>,
    pub format: Format,
}

/// Read a host context JSON file
pub fn load_context(path: &Path) -> Result<HostContext> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read context file {}", path.display()))?;
    let value = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    HostContext::from_value(value)
        .with_context(|| format!("Not a host context: {}", path.display()))
}

/// Render a snapshot to a string
pub fn render_snapshot(env: Environment, options: &RenderOptions) -> String {
    match options.format {
        Format::Html => {
            let mut controller = ViewController::new(env, HtmlTarget::new());
            drive(&mut controller, options);
            controller.document()
        }
        Format::Text => {
            let mut controller = ViewController::new(env, MemoryTarget::new());
            drive(&mut controller, options);
            let mut out = String::new();
            for line in render_lines(controller.target().nodes(), controller.env()) {
                for span in &line.spans {
                    out.push_str(&span.content);
                }
                out.push('\n');
            }
            out
        }
    }
}

fn drive<T: crate::render::PresentationTarget>(
    controller: &mut ViewController<T>,
    options: &RenderOptions,
) {
    if let Some(ctx) = &options.context {
        controller.apply_host_context(ctx);
    }
    if let Some(theme) = options.theme {
        if controller.state().active_theme != theme {
            controller.toggle_theme();
        }
    }
    controller.switch_tab(options.tab);
}

pub fn handle_render(config: &Config, options: RenderOptions, out: Option<&Path>) -> Result<()> {
    let (sheet, _) = TokenSheet::load(config.token_sheet.as_deref());
    let output = render_snapshot(Environment::new(sheet), &options);

    match out {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} snapshot to {}", options.tab.as_str(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// sheet
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_sheet(config: &Config) -> Result<()> {
    let (sheet, source) = TokenSheet::load(config.token_sheet.as_deref());
    let text = match source {
        // Keeps the bundled comments
        SheetSource::Bundled => crate::theme::bundled_sheet().to_string(),
        SheetSource::File(_) => sheet.to_toml().context("Failed to serialize token sheet")?,
    };
    print!("{}", text);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// config
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_config(show: bool, reset: bool, edit: bool, path: bool) -> Result<()> {
    if path {
        handle_config_path();
    } else if show {
        handle_config_show()?;
    } else if reset {
        handle_config_reset()?;
    } else if edit {
        handle_config_edit();
    } else {
        println!("Usage: theme-inspector config [--show|--reset|--edit|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        println!("  --path    Show config file path");
    }
    Ok(())
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush stderr")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::default()
        .save()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}
