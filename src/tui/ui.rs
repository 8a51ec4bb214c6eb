// UI rendering
//
// Three rows: tab bar (from the controller's chrome), the rendered view, and
// a status bar. Frame colors come from the inspected environment, so the
// whole screen follows the active theme.

use super::app::App;
use crate::controller::Tab;
use crate::logging::LogLevel;
use crate::resolver::resolve;
use crate::theme::color::parse_css_color;
use crate::theme::Environment;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Below this width the status bar drops the log line
const COMPACT_WIDTH: u16 = 80;

/// Frame colors resolved from the environment
struct Palette {
    background: Color,
    text: Color,
    muted: Color,
    accent: Color,
    border: Color,
}

impl Palette {
    fn from_env(env: &Environment) -> Self {
        let color = |token: &str, fallback: Color| {
            parse_css_color(&resolve(env, token), env.theme()).unwrap_or(fallback)
        };
        Self {
            background: color("--color-background-primary", Color::Reset),
            text: color("--color-text-primary", Color::Reset),
            muted: color("--color-text-secondary", Color::Gray),
            accent: color("--color-text-info", Color::Cyan),
            border: color("--color-border-primary", Color::DarkGray),
        }
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let palette = Palette::from_env(app.controller.env());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(f.area());

    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        f.area(),
    );

    render_tabs(f, chunks[0], app, &palette);
    render_content(f, chunks[1], app, &palette);
    render_status(f, chunks[2], app, &palette);
}

fn render_tabs(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chrome = app.controller.chrome();
    let titles: Vec<Line> = chrome
        .tabs
        .iter()
        .enumerate()
        .map(|(i, control)| Line::from(format!("{} {}", i + 1, control.tab.label())))
        .collect();
    let selected = chrome
        .selected()
        .and_then(|tab| Tab::ALL.iter().position(|t| *t == tab))
        .unwrap_or(0);

    let toggle = format!(" [t] {} ", chrome.toggle_label);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(Span::styled(
                    " Theme Inspector ",
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                ))
                .title_top(Line::from(toggle).right_aligned()),
        );

    f.render_widget(tabs, area);
}

fn render_content(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let lines = app.lines().to_vec();
    let position = format!(" {}/{} ", app.scroll + 1, lines.len().max(1));

    let content = Paragraph::new(lines)
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(format!(" {} ", app.active_tab().label()))
                .title_bottom(Line::from(position).right_aligned()),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll.min(u16::MAX as usize) as u16, 0));

    f.render_widget(content, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut text = format!(
        " {} │ {} │ {} │ {}/{} tokens set │ {} updates",
        app.uptime(),
        app.session,
        app.controller.state().active_theme.label(),
        app.coverage.0,
        app.coverage.1,
        app.host_updates,
    );

    if area.width >= COMPACT_WIDTH {
        if let Some(entry) = app.log_buffer.latest(LogLevel::Info) {
            text.push_str(&format!(
                " │ {} {} {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.level.as_str(),
                entry.message
            ));
        }
    }

    let status = Paragraph::new(truncate(&text, area.width as usize))
        .style(Style::default().fg(palette.muted))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.border)),
        );

    f.render_widget(status, area);
}

/// Cut `text` to at most `max` display columns, ending in "…" when cut
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::InspectorEvent;
    use crate::host::SessionStatus;
    use crate::logging::LogBuffer;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_truncate_respects_display_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
        // Wide glyphs take two columns each
        assert_eq!(truncate("いろはにほ", 5), "いろ…");
    }

    #[test]
    fn test_draws_tabs_and_status() {
        let app = App::new(
            Environment::standalone(),
            LogBuffer::new(),
            SessionStatus::Connecting,
        );
        let text = screen(&app, 100, 30);
        assert!(text.contains("Theme Inspector"));
        assert!(text.contains("1 Variables"));
        assert!(text.contains("2 Preview"));
        assert!(text.contains("connecting to host"));
        assert!(text.contains("Color Groups"));
    }

    #[test]
    fn test_preview_tab_on_screen() {
        let mut app = App::new(
            Environment::standalone(),
            LogBuffer::new(),
            SessionStatus::Connecting,
        );
        app.handle(InspectorEvent::SwitchTab(Tab::Preview));
        let text = screen(&app, 100, 30);
        assert!(text.contains(" Preview "));
        assert!(!text.contains("Color Groups"));
    }
}
