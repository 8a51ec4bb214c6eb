// TUI module - Terminal User Interface
//
// Interactive front-end for the inspector. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, host session events)
// - Rendering the current view through the terminal renderer

pub mod app;
pub mod ui;

use crate::events::InspectorEvent;
use crate::host::{self, SessionStatus};
use crate::logging::LogBuffer;
use crate::theme::Environment;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Lines moved per PageUp/PageDown
const PAGE_LINES: isize = 20;

/// Run the TUI
///
/// Sets up the terminal, starts the host session task, runs the event loop and
/// restores the terminal when done.
pub async fn run_tui(
    env: Environment,
    log_buffer: LogBuffer,
    host_addr: Option<String>,
    handshake_timeout: Option<Duration>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::channel::<InspectorEvent>(64);
    let session_task = tokio::spawn(host::run_session(host_addr, handshake_timeout, event_tx));

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(env, log_buffer, SessionStatus::Connecting);

    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx).await;

    session_task.abort();

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on keyboard input, the redraw tick and host session events, handling
/// whichever arrives first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::Receiver<InspectorEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Redraw keeps uptime and the log line current
            _ = tick_interval.tick() => {}

            Some(event) = event_rx.recv() => {
                app.handle(event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Map a key press to an inspector event or a scroll action
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if let Some(event) = key_to_event(app, &key_event) {
        app.handle(event);
        return;
    }

    match key_event.code {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::PageDown => app.scroll_by(PAGE_LINES),
        KeyCode::PageUp => app.scroll_by(-PAGE_LINES),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
        _ => {}
    }
}

fn key_to_event(app: &App, key_event: &KeyEvent) -> Option<InspectorEvent> {
    use crate::controller::Tab;

    match key_event.code {
        KeyCode::Char('q') => Some(InspectorEvent::Quit),
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InspectorEvent::Quit)
        }
        KeyCode::Char('1') => Some(InspectorEvent::SwitchTab(Tab::Variables)),
        KeyCode::Char('2') => Some(InspectorEvent::SwitchTab(Tab::Preview)),
        KeyCode::Tab => Some(InspectorEvent::SwitchTab(app.active_tab().next())),
        KeyCode::Char('t') => Some(InspectorEvent::ToggleTheme),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Tab;
    use crate::theme::ThemeMode;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(
            Environment::standalone(),
            LogBuffer::new(),
            SessionStatus::Connecting,
        )
    }

    #[test]
    fn test_tab_keys() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.active_tab(), Tab::Preview);
        handle_key_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_tab(), Tab::Variables);
    }

    #[test]
    fn test_theme_key() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('t')));
        assert_eq!(app.controller.state().active_theme, ThemeMode::Dark);
    }

    #[test]
    fn test_scroll_keys() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('j')));
        handle_key_event(&mut app, press(KeyCode::Down));
        assert_eq!(app.scroll, 2);
        handle_key_event(&mut app, press(KeyCode::Up));
        assert_eq!(app.scroll, 1);
        handle_key_event(&mut app, press(KeyCode::Home));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
