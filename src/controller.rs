//! View controller - tab/theme state, chrome, and the single render path
//!
//! Every transition (tab switch, theme toggle, host context) ends with the
//! content region cleared and the active tab rendered again from scratch.

use crate::host::{self, HostContext};
use crate::render::PresentationTarget;
use crate::resolver::ResolvedValues;
use crate::theme::{Environment, ThemeMode};
use crate::view::{render_preview, render_variables, Node};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// State
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Variables,
    Preview,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Variables, Tab::Preview];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Variables => "variables",
            Tab::Preview => "preview",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Variables => "Variables",
            Tab::Preview => "Preview",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::Variables => Tab::Preview,
            Tab::Preview => Tab::Variables,
        }
    }
}

/// What is shown: active tab and active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active_tab: Tab,
    pub active_theme: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabControl {
    pub tab: Tab,
    pub selected: bool,
}

/// Tab controls + theme toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub tabs: [TabControl; 2],
    /// Names the action: the theme a click would switch to
    pub toggle_label: &'static str,
}

impl Chrome {
    pub fn new(state: &ViewState) -> Self {
        let mut chrome = Self {
            tabs: Tab::ALL.map(|tab| TabControl {
                tab,
                selected: false,
            }),
            toggle_label: "",
        };
        chrome.select(state.active_tab);
        chrome.update_toggle_label(state.active_theme);
        chrome
    }

    pub fn select(&mut self, tab: Tab) {
        for control in &mut self.tabs {
            control.selected = control.tab == tab;
        }
    }

    pub fn update_toggle_label(&mut self, theme: ThemeMode) {
        self.toggle_label = theme.other().label();
    }

    pub fn selected(&self) -> Option<Tab> {
        self.tabs.iter().find(|c| c.selected).map(|c| c.tab)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Content for a tab against the current environment
///
/// Values are captured here, once per call, and dropped with the result.
pub fn render_view(tab: Tab, env: &Environment) -> Vec<Node> {
    match tab {
        Tab::Variables => render_variables(&ResolvedValues::capture(env)),
        Tab::Preview => render_preview(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Controller
// ─────────────────────────────────────────────────────────────────────────────

pub struct ViewController<T: PresentationTarget> {
    state: ViewState,
    env: Environment,
    chrome: Chrome,
    target: T,
}

impl<T: PresentationTarget> ViewController<T> {
    /// Initialize with default state and render the default tab
    pub fn new(mut env: Environment, target: T) -> Self {
        let state = ViewState::default();
        env.apply_theme(state.active_theme);
        let mut controller = Self {
            chrome: Chrome::new(&state),
            state,
            env,
            target,
        };
        controller.render_current_tab();
        controller
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.state.active_tab = tab;
        self.chrome.select(tab);
        tracing::debug!("Switched to {} tab", tab.as_str());
        self.render_current_tab();
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.state.active_theme.other();
        self.state.active_theme = theme;
        self.env.apply_theme(theme);
        self.chrome.update_toggle_label(theme);
        tracing::debug!("Theme toggled to {}", theme);
        self.render_current_tab();
    }

    /// Apply a host push, then re-render
    pub fn apply_host_context(&mut self, ctx: &HostContext) {
        host::apply_host_context(ctx, &mut self.state, &mut self.env, &mut self.chrome);
        self.render_current_tab();
    }

    /// Clear the content region and render the active tab into it
    pub fn render_current_tab(&mut self) {
        self.target.clear();
        for node in render_view(self.state.active_tab, &self.env) {
            self.target.append(&node);
        }
    }

    /// Full page for the current state (HTML front-ends)
    pub fn document(&self) -> String {
        let content = render_view(self.state.active_tab, &self.env);
        crate::render::render_document(&self.state, &self.chrome, &self.env, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MemoryTarget;
    use crate::view::node::walk_nodes;

    fn controller() -> ViewController<MemoryTarget> {
        ViewController::new(Environment::standalone(), MemoryTarget::new())
    }

    fn has_class(target: &MemoryTarget, class: &str) -> bool {
        walk_nodes(target.nodes()).iter().any(|e| e.has_class(class))
    }

    #[test]
    fn test_initial_render_is_variables_light() {
        let c = controller();
        assert_eq!(*c.state(), ViewState::default());
        assert_eq!(c.target().renders(), 1);
        assert!(has_class(c.target(), "color-group-card"));
        assert_eq!(c.chrome().toggle_label, "Dark");
        assert_eq!(c.chrome().selected(), Some(Tab::Variables));
    }

    #[test]
    fn test_switch_back_leaves_only_variables() {
        let mut c = controller();
        c.switch_tab(Tab::Preview);
        assert!(has_class(c.target(), "preview-section"));
        c.switch_tab(Tab::Variables);

        assert!(has_class(c.target(), "color-group-card"));
        assert!(!has_class(c.target(), "preview-section"));
        assert_eq!(c.target().nodes().len(), 3);
        assert_eq!(c.target().renders(), 3);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut c = controller();
        c.toggle_theme();
        assert_eq!(c.state().active_theme, ThemeMode::Dark);
        assert_eq!(c.env().theme(), ThemeMode::Dark);
        assert_eq!(c.chrome().toggle_label, "Light");

        c.toggle_theme();
        assert_eq!(c.state().active_theme, ThemeMode::Light);
        assert_eq!(c.env().theme(), ThemeMode::Light);
        assert_eq!(c.chrome().toggle_label, "Dark");
    }

    #[test]
    fn test_theme_only_context_keeps_overrides() {
        let mut c = controller();
        c.apply_host_context(&HostContext::from_variables([(
            "--color-text-primary",
            "rebeccapurple",
        )]));
        c.apply_host_context(&HostContext::with_theme("dark"));

        assert_eq!(c.state().active_theme, ThemeMode::Dark);
        assert_eq!(c.state().active_tab, Tab::Variables);
        assert_eq!(
            c.env().overrides().get("--color-text-primary").map(String::as_str),
            Some("rebeccapurple")
        );
        assert_eq!(c.chrome().toggle_label, "Light");
    }

    #[test]
    fn test_tab_switch_preserves_theme() {
        let mut c = controller();
        c.toggle_theme();
        c.switch_tab(Tab::Preview);
        assert_eq!(
            *c.state(),
            ViewState {
                active_tab: Tab::Preview,
                active_theme: ThemeMode::Dark
            }
        );
    }

    #[test]
    fn test_document_reflects_state() {
        let mut c = controller();
        c.toggle_theme();
        let page = c.document();
        assert!(page.contains(r#"data-theme="dark""#));
        assert!(page.contains("Color Groups"));
    }
}
