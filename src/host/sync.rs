//! Apply a host context to view state and the environment
//!
//! Absent fields leave state untouched. No rendering here; the caller
//! re-renders once the context is applied.

use super::HostContext;
use crate::controller::{Chrome, ViewState};
use crate::theme::{Environment, ThemeMode};

pub fn apply_host_context(
    ctx: &HostContext,
    state: &mut ViewState,
    env: &mut Environment,
    chrome: &mut Chrome,
) {
    if ctx.is_empty() {
        tracing::debug!("Host context carried nothing to apply");
        return;
    }

    if let Some(theme) = ctx.theme() {
        match ThemeMode::parse(theme) {
            Some(mode) => {
                state.active_theme = mode;
                env.apply_theme(mode);
                chrome.update_toggle_label(mode);
            }
            None => tracing::warn!("Ignoring unknown host theme '{}'", theme),
        }
    }

    if let Some(variables) = ctx.style_variables() {
        tracing::debug!("Applying {} host style variables", variables.len());
        env.apply_style_variables(variables);
    }

    if let Some(fonts) = ctx.fonts() {
        env.apply_fonts(fonts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::StyleSource;

    fn parts() -> (ViewState, Environment, Chrome) {
        let state = ViewState::default();
        let chrome = Chrome::new(&state);
        (state, Environment::standalone(), chrome)
    }

    #[test]
    fn test_theme_only_touches_theme() {
        let (mut state, mut env, mut chrome) = parts();
        env.apply_style_variables([("--color-ring-info", "red")]);

        apply_host_context(&HostContext::with_theme("dark"), &mut state, &mut env, &mut chrome);

        assert_eq!(state.active_theme, ThemeMode::Dark);
        assert_eq!(env.theme(), ThemeMode::Dark);
        assert_eq!(chrome.toggle_label, "Light");
        assert_eq!(env.computed_value("--color-ring-info").as_deref(), Some("red"));
        assert_eq!(env.fonts(), None);
    }

    #[test]
    fn test_unknown_theme_is_ignored() {
        let (mut state, mut env, mut chrome) = parts();
        apply_host_context(&HostContext::with_theme("sepia"), &mut state, &mut env, &mut chrome);
        assert_eq!(state.active_theme, ThemeMode::Light);
        assert_eq!(chrome.toggle_label, "Dark");
    }

    #[test]
    fn test_variables_replace_per_identifier() {
        let (mut state, mut env, mut chrome) = parts();
        env.apply_style_variables([("--a", "1"), ("--b", "2")]);

        apply_host_context(
            &HostContext::from_variables([("--b", "3")]),
            &mut state,
            &mut env,
            &mut chrome,
        );

        assert_eq!(env.overrides().get("--a").map(String::as_str), Some("1"));
        assert_eq!(env.overrides().get("--b").map(String::as_str), Some("3"));
        assert_eq!(state, ViewState::default());
    }
}
