// Cascade for a single element: inline style > class rules > environment
//
// Element-scoped custom properties (`--_ring-color` and friends) resolve from
// the same element's inline styles and class rules before the environment
// is consulted. Inheritance is left to the caller.

use super::stylesheet::rules_for;
use crate::theme::Environment;
use crate::view::node::Element;

/// Declared value of `property` on the element, before substitution
fn declared<'a>(element: &'a Element, property: &str) -> Option<std::borrow::Cow<'a, str>> {
    if let Some(value) = element.inline_style(property) {
        return Some(value.to_css().into());
    }
    rules_for(&element.classes)
        .filter_map(|rule| {
            rule.declarations
                .iter()
                .rev()
                .find(|(p, _)| *p == property)
                .map(|(_, v)| *v)
        })
        .last()
        .map(Into::into)
}

/// Computed value of `property` for `element`, or None when it has no
/// declaration or a referenced token is unset
pub fn computed_property(element: &Element, property: &str, env: &Environment) -> Option<String> {
    let value = declared(element, property)?;
    let locals = |name: &str| -> Option<String> {
        if name.starts_with("--_") {
            declared(element, name).map(|v| v.into_owned())
        } else {
            None
        }
    };
    env.substitute(&value, &locals)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::node::{el, find_class};
    use crate::view::render_preview;

    #[test]
    fn test_pushed_ring_color_reaches_swatch() {
        let mut env = Environment::standalone();
        env.apply_style_variables([("--color-ring-info", "rgb(0,0,255)")]);

        let nodes = render_preview();
        let swatch = crate::view::node::walk_nodes(&nodes)
            .into_iter()
            .find(|e| e.has_class("ring-box") && e.text_content() == "info")
            .unwrap();

        assert_eq!(
            computed_property(swatch, "--_ring-color", &env).as_deref(),
            Some("rgb(0,0,255)")
        );
        // Through the class rule's outline-color: var(--_ring-color)
        assert_eq!(
            computed_property(swatch, "outline-color", &env).as_deref(),
            Some("rgb(0,0,255)")
        );
    }

    #[test]
    fn test_class_rule_resolves_against_theme() {
        let mut env = Environment::standalone();
        let nodes = render_preview();
        let badge = find_class(&nodes, "badge-danger").unwrap();

        let light = computed_property(badge, "color", &env);
        env.apply_theme(crate::theme::ThemeMode::Dark);
        let dark = computed_property(badge, "color", &env);
        assert!(light.is_some());
        assert_ne!(light, dark);
    }

    #[test]
    fn test_inline_beats_class_rule() {
        let env = Environment::standalone();
        let e = el("div").class("card-primary").style("color", "red");
        assert_eq!(computed_property(&e, "color", &env).as_deref(), Some("red"));
    }

    #[test]
    fn test_undeclared_or_unset() {
        let env = Environment::new(crate::theme::TokenSheet::default());
        let e = el("div").class("badge-info");
        assert_eq!(computed_property(&e, "text-decoration", &env), None);
        assert_eq!(computed_property(&e, "color", &env), None);
        // No ring wiring: the disabled button's outline has nothing to resolve
        let disabled = el("button").class("btn").class("btn-disabled");
        assert_eq!(computed_property(&disabled, "outline-color", &env), None);
    }
}
