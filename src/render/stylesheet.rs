//! Class rules shared by every renderer
//!
//! The HTML page gets them as CSS; the terminal renderer looks them up
//! through [`rules_for`] when computing a property. Values are CSS text and
//! reference tokens with `var()`.

/// `.class[state] { property: value; ... }`
#[derive(Debug, Clone, Copy)]
pub struct ClassRule {
    pub class: &'static str,
    /// Pseudo-class suffix such as `:focus-visible`; ignored by the terminal cascade
    pub state: Option<&'static str>,
    pub declarations: &'static [(&'static str, &'static str)],
}

const fn rule(
    class: &'static str,
    declarations: &'static [(&'static str, &'static str)],
) -> ClassRule {
    ClassRule {
        class,
        state: None,
        declarations,
    }
}

const fn state_rule(
    class: &'static str,
    state: &'static str,
    declarations: &'static [(&'static str, &'static str)],
) -> ClassRule {
    ClassRule {
        class,
        state: Some(state),
        declarations,
    }
}

/// Element-level rules that are not expressible as class rules
const BASE_CSS: &str = r#"*, *::before, *::after { box-sizing: border-box; }
html { color-scheme: light; }
html[data-theme="dark"] { color-scheme: dark; }
body {
  margin: 0;
  background: var(--color-background-primary);
  color: var(--color-text-primary);
  font-family: var(--font-sans);
  font-size: var(--font-text-md-size);
  line-height: var(--font-text-md-line-height);
}
button { font: inherit; cursor: pointer; }
button:disabled { cursor: not-allowed; }
"#;

pub const RULES: &[ClassRule] = &[
    // ── Chrome ───────────────────────────────────────
    rule(
        "app-header",
        &[
            ("display", "flex"),
            ("align-items", "center"),
            ("justify-content", "space-between"),
            ("padding", "8px 16px"),
            ("background", "var(--color-background-secondary)"),
            ("border-bottom", "var(--border-width-regular) solid var(--color-border-primary)"),
        ],
    ),
    rule("tabs", &[("display", "flex"), ("gap", "4px")]),
    rule(
        "tab",
        &[
            ("background", "var(--color-background-ghost)"),
            ("color", "var(--color-text-secondary)"),
            ("border", "var(--border-width-regular) solid var(--color-border-ghost)"),
            ("border-radius", "var(--border-radius-sm)"),
            ("padding", "4px 12px"),
        ],
    ),
    rule(
        "active",
        &[
            ("background", "var(--color-background-primary)"),
            ("color", "var(--color-text-primary)"),
            ("font-weight", "var(--font-weight-semibold)"),
        ],
    ),
    rule(
        "theme-toggle",
        &[
            ("background", "var(--color-background-inverse)"),
            ("color", "var(--color-text-inverse)"),
            ("border", "var(--border-width-regular) solid var(--color-border-inverse)"),
            ("border-radius", "var(--border-radius-full)"),
            ("padding", "4px 14px"),
        ],
    ),
    rule(
        "content",
        &[("padding", "16px"), ("display", "flex"), ("flex-direction", "column"), ("gap", "24px")],
    ),
    // ── Variables view ───────────────────────────────
    rule("category", &[("margin-bottom", "24px")]),
    rule(
        "category-title",
        &[
            ("font-size", "var(--font-heading-md-size)"),
            ("line-height", "var(--font-heading-md-line-height)"),
            ("font-weight", "var(--font-weight-bold)"),
            ("color", "var(--color-text-primary)"),
            ("margin", "0 0 12px"),
        ],
    ),
    rule(
        "color-groups-grid",
        &[
            ("display", "grid"),
            ("grid-template-columns", "repeat(auto-fill, minmax(280px, 1fr))"),
            ("gap", "12px"),
        ],
    ),
    rule(
        "color-group-card",
        &[
            ("border-width", "var(--border-width-regular)"),
            ("border-style", "solid"),
            ("border-radius", "var(--border-radius-md)"),
            ("padding", "12px"),
        ],
    ),
    rule(
        "color-group-header",
        &[("display", "flex"), ("flex-direction", "column"), ("gap", "2px"), ("margin-bottom", "8px")],
    ),
    rule("color-group-label", &[("font-weight", "var(--font-weight-bold)")]),
    rule(
        "color-group-desc",
        &[("font-size", "var(--font-text-sm-size)"), ("opacity", "0.8")],
    ),
    rule(
        "color-group-samples",
        &[("display", "flex"), ("flex-wrap", "wrap"), ("gap", "8px"), ("align-items", "center")],
    ),
    rule(
        "color-group-alert",
        &[
            ("flex-basis", "100%"),
            ("border-left-width", "3px"),
            ("border-left-style", "solid"),
            ("padding", "4px 8px"),
            ("font-size", "var(--font-text-sm-size)"),
        ],
    ),
    rule(
        "color-group-badge",
        &[
            ("border-width", "var(--border-width-regular)"),
            ("border-style", "solid"),
            ("border-radius", "var(--border-radius-full)"),
            ("padding", "2px 8px"),
            ("font-size", "var(--font-text-xs-size)"),
            ("font-weight", "var(--font-weight-medium)"),
        ],
    ),
    rule(
        "color-group-ring",
        &[
            ("background", "var(--color-background-primary)"),
            ("color", "var(--color-text-primary)"),
            ("border", "var(--border-width-regular) solid var(--color-border-primary)"),
            ("border-radius", "var(--border-radius-sm)"),
            ("padding", "2px 8px"),
            ("outline-color", "var(--_ring-color)"),
        ],
    ),
    state_rule(
        "color-group-ring",
        ":focus-visible",
        &[("outline", "2px solid var(--_ring-color)"), ("outline-offset", "2px")],
    ),
    rule(
        "color-group-vars",
        &[
            ("margin-top", "8px"),
            ("display", "flex"),
            ("flex-direction", "column"),
            ("gap", "2px"),
        ],
    ),
    rule(
        "var-meta",
        &[
            ("display", "flex"),
            ("justify-content", "space-between"),
            ("gap", "8px"),
            ("font-family", "var(--font-mono)"),
            ("font-size", "var(--font-text-xs-size)"),
        ],
    ),
    rule("var-name", &[("opacity", "0.8")]),
    rule("var-value", &[("font-weight", "var(--font-weight-medium)")]),
    rule(
        "var-unset",
        &[("color", "var(--color-text-tertiary)"), ("font-style", "italic")],
    ),
    rule(
        "var-row",
        &[("display", "flex"), ("align-items", "center"), ("gap", "12px")],
    ),
    rule(
        "font-family-row",
        &[
            ("padding", "8px 0"),
            ("border-bottom", "var(--border-width-regular) solid var(--color-border-secondary)"),
        ],
    ),
    rule("font-family-sample", &[("font-size", "var(--font-text-lg-size)")]),
    rule(
        "font-weight-grid",
        &[("display", "grid"), ("grid-template-columns", "repeat(4, 1fr)"), ("gap", "8px")],
    ),
    rule(
        "font-weight-box",
        &[
            ("padding", "8px"),
            ("border", "var(--border-width-regular) solid var(--color-border-secondary)"),
            ("border-radius", "var(--border-radius-sm)"),
        ],
    ),
    rule("font-weight-sample", &[("font-size", "var(--font-text-lg-size)")]),
    rule(
        "type-scale-row",
        &[
            ("display", "flex"),
            ("justify-content", "space-between"),
            ("gap", "16px"),
            ("padding", "8px 0"),
            ("border-bottom", "var(--border-width-regular) solid var(--color-border-secondary)"),
        ],
    ),
    rule("type-scale-sample", &[("color", "var(--color-text-primary)")]),
    rule("type-scale-meta", &[("min-width", "240px")]),
    rule(
        "visual-grid",
        &[("display", "flex"), ("flex-wrap", "wrap"), ("gap", "16px")],
    ),
    rule(
        "visual-item",
        &[("display", "flex"), ("flex-direction", "column"), ("align-items", "center"), ("gap", "4px")],
    ),
    rule(
        "radius-box",
        &[
            ("width", "56px"),
            ("height", "56px"),
            ("background", "var(--color-background-secondary)"),
            ("border", "var(--border-width-regular) solid var(--color-border-primary)"),
        ],
    ),
    rule(
        "shadow-box",
        &[
            ("width", "56px"),
            ("height", "56px"),
            ("background", "var(--color-background-primary)"),
            ("border-radius", "var(--border-radius-md)"),
        ],
    ),
    rule("visual-label", &[("font-weight", "var(--font-weight-semibold)")]),
    rule(
        "visual-value",
        &[
            ("font-family", "var(--font-mono)"),
            ("font-size", "var(--font-text-xs-size)"),
            ("color", "var(--color-text-secondary)"),
        ],
    ),
    rule(
        "bw-box",
        &[
            ("width", "56px"),
            ("height", "32px"),
            ("border-style", "solid"),
            ("border-color", "var(--color-border-primary)"),
        ],
    ),
    // ── Preview view ─────────────────────────────────
    rule("preview-section", &[("margin-bottom", "24px")]),
    rule(
        "preview-section-title",
        &[
            ("font-size", "var(--font-heading-sm-size)"),
            ("line-height", "var(--font-heading-sm-line-height)"),
            ("font-weight", "var(--font-weight-semibold)"),
            ("color", "var(--color-text-secondary)"),
            ("margin", "0 0 8px"),
        ],
    ),
    rule(
        "preview-h1",
        &[
            ("font-size", "var(--font-heading-3xl-size)"),
            ("line-height", "var(--font-heading-3xl-line-height)"),
            ("font-weight", "var(--font-weight-bold)"),
            ("color", "var(--color-text-primary)"),
        ],
    ),
    rule(
        "preview-h2",
        &[
            ("font-size", "var(--font-heading-2xl-size)"),
            ("line-height", "var(--font-heading-2xl-line-height)"),
            ("font-weight", "var(--font-weight-bold)"),
            ("color", "var(--color-text-primary)"),
        ],
    ),
    rule(
        "preview-h3",
        &[
            ("font-size", "var(--font-heading-xl-size)"),
            ("line-height", "var(--font-heading-xl-line-height)"),
            ("font-weight", "var(--font-weight-semibold)"),
            ("color", "var(--color-text-primary)"),
        ],
    ),
    rule(
        "preview-body",
        &[
            ("font-size", "var(--font-text-md-size)"),
            ("line-height", "var(--font-text-md-line-height)"),
            ("color", "var(--color-text-primary)"),
        ],
    ),
    rule(
        "preview-secondary",
        &[
            ("font-size", "var(--font-text-sm-size)"),
            ("line-height", "var(--font-text-sm-line-height)"),
            ("color", "var(--color-text-secondary)"),
        ],
    ),
    rule(
        "preview-code",
        &[
            ("font-family", "var(--font-mono)"),
            ("font-size", "var(--font-text-sm-size)"),
            ("background", "var(--color-background-secondary)"),
            ("color", "var(--color-text-primary)"),
            ("border", "var(--border-width-regular) solid var(--color-border-secondary)"),
            ("border-radius", "var(--border-radius-sm)"),
            ("padding", "8px 12px"),
        ],
    ),
    rule("card-stack", &[("display", "flex"), ("flex-direction", "column"), ("gap", "12px")]),
    rule(
        "card",
        &[
            ("padding", "12px 16px"),
            ("border-radius", "var(--border-radius-lg)"),
            ("box-shadow", "var(--shadow-sm)"),
        ],
    ),
    rule(
        "card-primary",
        &[
            ("background", "var(--color-background-primary)"),
            ("color", "var(--color-text-primary)"),
            ("border", "var(--border-width-regular) solid var(--color-border-primary)"),
        ],
    ),
    rule(
        "card-secondary",
        &[
            ("background", "var(--color-background-secondary)"),
            ("color", "var(--color-text-primary)"),
            ("border", "var(--border-width-regular) solid var(--color-border-secondary)"),
        ],
    ),
    rule(
        "card-tertiary",
        &[
            ("background", "var(--color-background-tertiary)"),
            ("color", "var(--color-text-primary)"),
            ("border", "var(--border-width-regular) solid var(--color-border-tertiary)"),
        ],
    ),
    rule("card-title", &[("font-weight", "var(--font-weight-semibold)")]),
    rule(
        "card-text",
        &[("font-size", "var(--font-text-sm-size)"), ("color", "var(--color-text-secondary)")],
    ),
    rule("badge-row", &[("display", "flex"), ("flex-wrap", "wrap"), ("gap", "8px")]),
    rule(
        "badge",
        &[
            ("display", "inline-block"),
            ("padding", "2px 10px"),
            ("border-radius", "var(--border-radius-full)"),
            ("border-width", "var(--border-width-regular)"),
            ("border-style", "solid"),
            ("font-size", "var(--font-text-xs-size)"),
            ("font-weight", "var(--font-weight-medium)"),
        ],
    ),
    rule(
        "badge-info",
        &[
            ("background", "var(--color-background-info)"),
            ("color", "var(--color-text-info)"),
            ("border-color", "var(--color-border-info)"),
        ],
    ),
    rule(
        "badge-success",
        &[
            ("background", "var(--color-background-success)"),
            ("color", "var(--color-text-success)"),
            ("border-color", "var(--color-border-success)"),
        ],
    ),
    rule(
        "badge-warning",
        &[
            ("background", "var(--color-background-warning)"),
            ("color", "var(--color-text-warning)"),
            ("border-color", "var(--color-border-warning)"),
        ],
    ),
    rule(
        "badge-danger",
        &[
            ("background", "var(--color-background-danger)"),
            ("color", "var(--color-text-danger)"),
            ("border-color", "var(--color-border-danger)"),
        ],
    ),
    rule("button-list", &[("display", "flex"), ("flex-direction", "column"), ("gap", "8px")]),
    rule("button-list-item", &[("display", "flex"), ("align-items", "center"), ("gap", "12px")]),
    rule(
        "button-list-label",
        &[
            ("font-family", "var(--font-mono)"),
            ("font-size", "var(--font-text-xs-size)"),
            ("color", "var(--color-text-tertiary)"),
        ],
    ),
    rule(
        "btn",
        &[
            ("min-width", "160px"),
            ("padding", "6px 14px"),
            ("border-width", "var(--border-width-regular)"),
            ("border-style", "solid"),
            ("border-radius", "var(--border-radius-md)"),
            ("font-weight", "var(--font-weight-medium)"),
            ("outline-color", "var(--_ring-color)"),
        ],
    ),
    state_rule(
        "btn",
        ":focus-visible",
        &[("outline", "2px solid var(--_ring-color)"), ("outline-offset", "2px")],
    ),
    rule(
        "btn-primary",
        &[
            ("background", "var(--color-background-inverse)"),
            ("color", "var(--color-text-inverse)"),
            ("border-color", "var(--color-border-inverse)"),
        ],
    ),
    rule(
        "btn-ghost",
        &[
            ("background", "var(--color-background-ghost)"),
            ("color", "var(--color-text-ghost)"),
            ("border-color", "var(--color-border-ghost)"),
        ],
    ),
    rule(
        "btn-info",
        &[
            ("background", "var(--color-background-info)"),
            ("color", "var(--color-text-info)"),
            ("border-color", "var(--color-border-info)"),
        ],
    ),
    rule(
        "btn-success",
        &[
            ("background", "var(--color-background-success)"),
            ("color", "var(--color-text-success)"),
            ("border-color", "var(--color-border-success)"),
        ],
    ),
    rule(
        "btn-warning",
        &[
            ("background", "var(--color-background-warning)"),
            ("color", "var(--color-text-warning)"),
            ("border-color", "var(--color-border-warning)"),
        ],
    ),
    rule(
        "btn-danger",
        &[
            ("background", "var(--color-background-danger)"),
            ("color", "var(--color-text-danger)"),
            ("border-color", "var(--color-border-danger)"),
        ],
    ),
    rule(
        "btn-disabled",
        &[
            ("background", "var(--color-background-disabled)"),
            ("color", "var(--color-text-disabled)"),
            ("border-color", "var(--color-border-disabled)"),
        ],
    ),
    rule(
        "bordered-list",
        &[
            ("border", "var(--border-width-regular) solid var(--color-border-primary)"),
            ("border-radius", "var(--border-radius-md)"),
            ("overflow", "hidden"),
        ],
    ),
    rule(
        "bordered-list-item",
        &[
            ("padding", "8px 12px"),
            ("color", "var(--color-text-primary)"),
            ("border-bottom", "var(--border-width-regular) solid var(--color-border-secondary)"),
        ],
    ),
    rule("ring-demo", &[("display", "flex"), ("flex-wrap", "wrap"), ("gap", "12px")]),
    rule(
        "ring-box",
        &[
            ("padding", "8px 14px"),
            ("background", "var(--color-background-secondary)"),
            ("color", "var(--color-text-primary)"),
            ("border", "var(--border-width-regular) solid var(--color-border-primary)"),
            ("border-radius", "var(--border-radius-md)"),
            ("outline-color", "var(--_ring-color)"),
        ],
    ),
    state_rule(
        "ring-box",
        ":focus-visible",
        &[("outline", "2px solid var(--_ring-color)"), ("outline-offset", "2px")],
    ),
];

/// Stateless rules applying to an element's classes, in stylesheet order
pub fn rules_for<'a>(classes: &'a [&'static str]) -> impl Iterator<Item = &'static ClassRule> + 'a {
    RULES
        .iter()
        .filter(move |r| r.state.is_none() && classes.contains(&r.class))
}

/// The whole stylesheet as CSS text
pub fn to_css() -> String {
    let mut css = String::from(BASE_CSS);
    for rule in RULES {
        css.push('.');
        css.push_str(rule.class);
        if let Some(state) = rule.state {
            css.push_str(state);
        }
        css.push_str(" {");
        for (property, value) in rule.declarations {
            css.push_str(&format!(" {}: {};", property, value));
        }
        css.push_str(" }\n");
    }
    css
}
