//! Page chrome around the content region: tab controls and the theme toggle

use super::node::{el, Element, Node};
use crate::controller::Chrome;

pub fn render_chrome(chrome: &Chrome) -> Element {
    let tabs = chrome.tabs.iter().map(|control| {
        let mut button = el("button").class("tab");
        if control.selected {
            button = button.class("active");
        }
        button
            .attr("type", "button")
            .attr("role", "tab")
            .attr("data-tab", control.tab.as_str())
            .attr("aria-selected", control.selected.to_string())
            .text(control.tab.label())
    });

    el("header")
        .class("app-header")
        .child(el("nav").class("tabs").attr("role", "tablist").children(tabs))
        .child(
            el("button")
                .class("theme-toggle")
                .attr("id", "theme-toggle")
                .attr("type", "button")
                .text(chrome.toggle_label),
        )
}

/// The region every render clears and refills
pub fn content_region(nodes: &[Node]) -> Element {
    el("main")
        .attr("id", "content")
        .class("content")
        .children(nodes.iter().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Tab, ViewState};
    use crate::theme::ThemeMode;

    #[test]
    fn test_exactly_one_tab_selected() {
        let state = ViewState {
            active_tab: Tab::Preview,
            active_theme: ThemeMode::Light,
        };
        let header = render_chrome(&Chrome::new(&state));
        let tabs = header.find_all_class("tab");
        assert_eq!(tabs.len(), 2);

        let selected: Vec<_> = tabs
            .iter()
            .filter(|t| t.get_attr("aria-selected") == Some("true"))
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].get_attr("data-tab"), Some("preview"));
        assert!(selected[0].has_class("active"));
    }

    #[test]
    fn test_toggle_names_other_theme() {
        let header = render_chrome(&Chrome::new(&ViewState::default()));
        let toggle = header.find_class("theme-toggle").unwrap();
        assert_eq!(toggle.text_content(), "Dark");
    }
}
