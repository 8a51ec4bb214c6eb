// Theme Inspector - design token viewer and component preview
//
// Shows every design token the host provides (grouped by category, with
// resolved values and samples) and a gallery of components styled only with
// those tokens.
//
// Architecture:
// - schema / resolver: the token catalog and value lookup
// - theme: token sheet defaults, host overrides, var() substitution
// - view / controller: node trees for both tabs, tab/theme state
// - render: HTML document, terminal lines, shared cascade
// - host: host context handshake and pushes over a JSON-lines channel
// - server (axum): inspect-theme tool + UI resource
// - tui (ratatui): interactive inspector

mod cli;
mod config;
mod controller;
mod events;
mod host;
mod logging;
mod render;
mod resolver;
mod schema;
mod server;
mod startup;
mod theme;
mod tui;
mod view;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, RenderOptions};
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use theme::{Environment, TokenSheet};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Keep alive until exit so buffered file logs flush
type FileGuard = Option<tracing_appender::non_blocking::WorkerGuard>;

/// Install the tracing subscriber
///
/// TUI mode captures events into `log_buffer`; every other mode writes to
/// stderr. File logging (JSON) is added on top when enabled.
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(config: &Config, tui_mode: bool, log_buffer: &LogBuffer) -> FileGuard {
    let default_filter = format!("theme_inspector={},axum=info", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = tui_mode.then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer =
        (!tui_mode).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let logging = &config.logging;
    let file_writer = if logging.file_enabled {
        match std::fs::create_dir_all(&logging.file_dir) {
            Ok(()) => {
                let appender = match logging.file_rotation {
                    LogRotation::Hourly => {
                        tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
                    }
                    LogRotation::Daily => {
                        tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
                    }
                    LogRotation::Never => {
                        tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
                    }
                };
                Some(tracing_appender::non_blocking(appender))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    let (file_layer, guard) = match file_writer {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management runs before anything touches the config file
    if let Some(Commands::Config {
        show,
        reset,
        edit,
        path,
    }) = cli.command
    {
        return cli::handle_config(show, reset, edit, path);
    }

    Config::ensure_config_exists();
    let config = Config::from_env()?;

    let command = cli.command.unwrap_or(Commands::Tui { host: None });
    let tui_mode = matches!(command, Commands::Tui { .. });

    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, tui_mode, &log_buffer);

    match command {
        Commands::Tui { host } => {
            let (sheet, source) = TokenSheet::load(config.token_sheet.as_deref());
            startup::log_startup(&config, &source);

            let host_addr = host.or_else(|| config.host.addr.clone());
            tui::run_tui(
                Environment::new(sheet),
                log_buffer,
                host_addr,
                config.host.handshake_timeout(),
            )
            .await
        }
        Commands::Render {
            tab,
            theme,
            context,
            format,
            out,
        } => {
            let context = context.as_deref().map(cli::load_context).transpose()?;
            let options = RenderOptions {
                tab,
                theme,
                context,
                format,
            };
            cli::handle_render(&config, options, out.as_deref())
        }
        Commands::Serve { bind } => {
            let (sheet, source) = TokenSheet::load(config.token_sheet.as_deref());
            let mut config = config;
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            startup::print_startup(&config, &source);
            server::start_server(config.bind_addr, sheet).await
        }
        Commands::Sheet => cli::handle_sheet(&config),
        Commands::Config { .. } => Ok(()),
    }
}
