// TUI application state
//
// Wraps the view controller (rendering into memory) with the bits only the
// terminal needs: scroll position, session status, the log buffer.

use crate::controller::{Tab, ViewController};
use crate::events::InspectorEvent;
use crate::host::SessionStatus;
use crate::logging::LogBuffer;
use crate::render::terminal::render_lines;
use crate::render::MemoryTarget;
use crate::resolver::ResolvedValues;
use crate::theme::Environment;
use ratatui::text::Line;
use std::time::Instant;

pub struct App {
    pub controller: ViewController<MemoryTarget>,

    /// Session state shown in the status bar
    pub session: SessionStatus,

    /// Captured log output
    pub log_buffer: LogBuffer,

    /// First visible content line
    pub scroll: usize,

    /// Styled content for the current render, rebuilt after each transition
    lines: Vec<Line<'static>>,

    /// Host context pushes applied so far
    pub host_updates: usize,

    /// Schema tokens with a value, out of all schema tokens
    pub coverage: (usize, usize),

    pub should_quit: bool,

    pub start_time: Instant,
}

impl App {
    pub fn new(env: Environment, log_buffer: LogBuffer, session: SessionStatus) -> Self {
        let controller = ViewController::new(env, MemoryTarget::new());
        let mut app = Self {
            controller,
            session,
            log_buffer,
            scroll: 0,
            lines: Vec::new(),
            host_updates: 0,
            coverage: (0, 0),
            should_quit: false,
            start_time: Instant::now(),
        };
        app.refresh_lines();
        app
    }

    fn refresh_lines(&mut self) {
        self.lines = render_lines(self.controller.target().nodes(), self.controller.env());
        self.scroll = self.scroll.min(self.max_scroll());

        let values = ResolvedValues::capture(self.controller.env());
        self.coverage = (values.set_count(), values.len());
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let next = self.scroll as isize + delta;
        self.scroll = next.clamp(0, self.max_scroll() as isize) as usize;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Apply an inspector event
    pub fn handle(&mut self, event: InspectorEvent) {
        match event {
            InspectorEvent::SwitchTab(tab) => {
                if tab != self.controller.state().active_tab {
                    self.scroll = 0;
                }
                self.controller.switch_tab(tab);
                self.refresh_lines();
            }
            InspectorEvent::ToggleTheme => {
                self.controller.toggle_theme();
                self.refresh_lines();
            }
            InspectorEvent::Session(status) => {
                self.session = status;
            }
            InspectorEvent::HostContextChanged(ctx) => {
                self.controller.apply_host_context(&ctx);
                self.host_updates += 1;
                self.refresh_lines();
            }
            InspectorEvent::Quit => self.should_quit = true,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.controller.state().active_tab
    }

    /// Uptime as "1h 2m 3s"
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
        if h > 0 {
            format!("{}h {}m {}s", h, m, s)
        } else if m > 0 {
            format!("{}m {}s", m, s)
        } else {
            format!("{}s", s)
        }
    }
}
