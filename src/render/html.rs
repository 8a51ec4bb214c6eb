//! HTML output - fragments for the content region and the full page
//!
//! The page is self-contained: token defaults from the sheet, host overrides
//! as the root inline style, host fonts, the stylesheet, the chrome and the
//! rendered tab. This is what `resources/read` serves and what
//! `render --format html` writes.

use super::stylesheet;
use super::PresentationTarget;
use crate::controller::{Chrome, ViewState};
use crate::theme::{Environment, ThemeMode};
use crate::view::node::{Element, Node};
use crate::view::shell;
use std::collections::BTreeMap;

/// Elements without closing tags
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Accumulates HTML for appended nodes
#[derive(Debug, Default)]
pub struct HtmlTarget {
    html: String,
}

impl HtmlTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

impl PresentationTarget for HtmlTarget {
    fn clear(&mut self) {
        self.html.clear();
    }

    fn append(&mut self, node: &Node) {
        write_node(&mut self.html, node);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Escaping
// ─────────────────────────────────────────────────────────────────────────────

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;").replace('\'', "&#39;")
}

/// Keep host-supplied CSS from closing the surrounding `<style>` element
fn guard_style_content(css: &str) -> String {
    css.replace("</", "<\\/")
}

// ─────────────────────────────────────────────────────────────────────────────
// Fragments
// ─────────────────────────────────────────────────────────────────────────────

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.tag);

    if !element.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_attr(&element.classes.join(" ")));
        out.push('"');
    }

    if !element.styles.is_empty() {
        let style: Vec<String> = element
            .styles
            .iter()
            .map(|d| format!("{}: {}", d.property, d.value.to_css()))
            .collect();
        out.push_str(" style=\"");
        out.push_str(&escape_attr(&style.join("; ")));
        out.push('"');
    }

    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
    }
    out.push('>');

    if VOID_TAGS.contains(&element.tag) {
        return;
    }

    for child in &element.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(element) => write_element(out, element),
        Node::Text(text) => out.push_str(&escape_text(text)),
    }
}

/// HTML for a list of root nodes
pub fn fragment(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Document
// ─────────────────────────────────────────────────────────────────────────────

fn declaration_block(
    selector: &str,
    values: &BTreeMap<String, String>,
    scheme: ThemeMode,
) -> String {
    let mut css = format!("{} {{\n", selector);
    for (token, value) in values {
        css.push_str(&format!("  {}: {};\n", token, value));
    }
    css.push_str(&format!("  color-scheme: {};\n}}\n", scheme.as_str()));
    css
}

/// Sheet defaults: shared + light on `:root`, dark under `[data-theme="dark"]`
fn token_defaults(env: &Environment) -> String {
    let sheet = env.sheet();
    let mut light = sheet.tokens.clone();
    light.extend(sheet.light.clone());

    let mut css = declaration_block(":root", &light, ThemeMode::Light);
    css.push_str(&declaration_block(
        "[data-theme=\"dark\"]",
        &sheet.dark,
        ThemeMode::Dark,
    ));
    css
}

/// Full page for the given state and content
pub fn render_document(
    state: &ViewState,
    chrome: &Chrome,
    env: &Environment,
    content: &[Node],
) -> String {
    let overrides: Vec<String> = env
        .overrides()
        .iter()
        .map(|(token, value)| format!("{}: {}", token, value))
        .collect();
    let root_style = if overrides.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", escape_attr(&overrides.join("; ")))
    };

    let fonts = env
        .fonts()
        .map(|css| {
            format!(
                "<style id=\"host-fonts\">\n{}\n</style>\n",
                guard_style_content(css)
            )
        })
        .unwrap_or_default();

    let chrome_html = fragment(&[shell::render_chrome(chrome).into()]);
    let content_html = fragment(&[shell::content_region(content).into()]);

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}"{root_style}>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Theme Inspector</title>
{fonts}<style id="token-defaults">
{defaults}</style>
<style id="inspector">
{stylesheet}</style>
</head>
<body data-tab="{tab}">
{chrome_html}
{content_html}
</body>
</html>
"#,
        theme = state.active_theme.as_str(),
        root_style = root_style,
        fonts = fonts,
        defaults = guard_style_content(&token_defaults(env)),
        stylesheet = stylesheet::to_css(),
        tab = state.active_tab.as_str(),
        chrome_html = chrome_html,
        content_html = content_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Tab;
    use crate::view::node::el;

    #[test]
    fn test_fragment_escapes_and_styles() {
        let node: Node = el("div")
            .class("card")
            .var("background", "--color-background-primary")
            .attr("data-note", "a\"b")
            .text("<b>&</b>")
            .into();
        assert_eq!(
            fragment(&[node]),
            r#"<div class="card" style="background: var(--color-background-primary)" data-note="a&quot;b">&lt;b&gt;&amp;&lt;/b&gt;</div>"#
        );
    }

    #[test]
    fn test_boolean_attribute() {
        let node: Node = el("button").attr("disabled", "").text("x").into();
        assert_eq!(fragment(&[node]), "<button disabled>x</button>");
    }

    #[test]
    fn test_target_clear_then_append() {
        let mut target = HtmlTarget::new();
        target.append(&el("p").text("one").into());
        target.clear();
        target.append(&el("p").text("two").into());
        assert_eq!(target.html(), "<p>two</p>");
    }

    #[test]
    fn test_document_carries_theme_overrides_and_fonts() {
        let mut env = Environment::standalone();
        env.apply_theme(ThemeMode::Dark);
        env.apply_style_variables([("--color-ring-info", "rgb(0,0,255)")]);
        env.apply_fonts("@font-face { font-family: X; src: url(x.woff2); }");

        let state = ViewState {
            active_tab: Tab::Preview,
            active_theme: ThemeMode::Dark,
        };
        let chrome = Chrome::new(&state);
        let page = render_document(&state, &chrome, &env, &[]);

        assert!(page.contains(r#"<html lang="en" data-theme="dark" style="--color-ring-info: rgb(0,0,255)">"#));
        assert!(page.contains("@font-face { font-family: X;"));
        assert!(page.contains("[data-theme=\"dark\"] {"));
        assert!(page.contains("--color-background-primary: #ffffff;"));
        assert!(page.contains(r#"<body data-tab="preview">"#));
        assert!(page.contains(r#"<main id="content" class="content">"#));
    }

    #[test]
    fn test_host_css_cannot_close_style() {
        let mut env = Environment::standalone();
        env.apply_fonts("</style><script>alert(1)</script>");
        let state = ViewState::default();
        let page = render_document(&state, &Chrome::new(&state), &env, &[]);
        assert!(!page.contains("</style><script>"));
    }
}
