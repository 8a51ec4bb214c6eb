//! Variables tab - every schema token with its resolved value and a sample
//!
//! Output is three category blocks in fixed order: Color Groups, Typography,
//! Visual. Sample elements reference tokens symbolically; only the value
//! rows carry resolved strings.

use super::node::{el, Element, Node};
use crate::resolver::ResolvedValues;
use crate::schema::{
    self, ColorGroup, TypeScaleEntry, BORDER_RADII, BORDER_WIDTH, COLOR_GROUPS, FONT_FAMILIES,
    FONT_WEIGHTS, HEADING_SCALE, RADIUS_PREFIX, SHADOWS, SHADOW_PREFIX, TEXT_SCALE,
};

const PANGRAM: &str = "The quick brown fox jumps over the lazy dog. 0123456789";
const IROHA: &str = "いろはにほへと散りぬるを。色は匂へど散りぬるを。";
const SCALE_SAMPLE_EN: &str = "The quick brown fox";
const SCALE_SAMPLE_JA: &str = "素早い茶色の狐が怠惰な犬を飛び越える";

/// Render the Variables tab
pub fn render_variables(values: &ResolvedValues) -> Vec<Node> {
    vec![
        category_block("color-groups", vec![color_groups(values)]).into(),
        category_block("typography", typography(values)).into(),
        category_block("visual", visual(values)).into(),
    ]
}

fn category_block(name: &'static str, sections: Vec<Element>) -> Element {
    el("div")
        .class("category-block")
        .attr("data-category", name)
        .children(sections)
}

fn category(title: &'static str) -> Element {
    el("section")
        .class("category")
        .child(el("h2").class("category-title").text(title))
}

/// Token name + resolved value
fn var_label(token: &'static str, values: &ResolvedValues) -> Element {
    el("div")
        .class("var-meta")
        .child(el("span").class("var-name").text(token))
        .child(value_span(token, values))
}

fn value_span(token: &'static str, values: &ResolvedValues) -> Element {
    let span = el("span").class("var-value");
    let span = if values.is_set(token) {
        span
    } else {
        span.class("var-unset")
    };
    span.text(values.get(token))
}

// ─────────────────────────────────────────────────────────────────────────────
// Color Groups
// ─────────────────────────────────────────────────────────────────────────────

fn color_groups(values: &ResolvedValues) -> Element {
    category("Color Groups").child(
        el("div")
            .class("color-groups-grid")
            .children(COLOR_GROUPS.iter().map(|g| color_group_card(g, values))),
    )
}

/// One card per group, styled only with the group's own tokens
pub(crate) fn color_group_card(group: &ColorGroup, values: &ResolvedValues) -> Element {
    let header = el("div")
        .class("color-group-header")
        .child(el("strong").class("color-group-label").text(group.label))
        .child(el("span").class("color-group-desc").text(group.description));

    let mut samples = el("div")
        .class("color-group-samples")
        .child(
            el("div")
                .class("color-group-alert")
                .var("border-left-color", group.border)
                .text(format!("This is a {} alert message.", group.name)),
        )
        .child(
            el("span")
                .class("color-group-badge")
                .var("background", group.background)
                .var("color", group.text)
                .var("border-color", group.border)
                .text(group.label),
        );

    if let Some(ring) = group.ring {
        samples = samples.child(
            el("button")
                .class("color-group-ring")
                .attr("type", "button")
                .var("--_ring-color", ring)
                .text("Click to focus"),
        );
    }

    let vars = el("div")
        .class("color-group-vars")
        .children(group.tokens().into_iter().map(|t| var_label(t, values)));

    el("div")
        .class("color-group-card")
        .attr("data-group", group.name)
        .var("background", group.background)
        .var("color", group.text)
        .var("border-color", group.border)
        .child(header)
        .child(samples)
        .child(vars)
}

// ─────────────────────────────────────────────────────────────────────────────
// Typography
// ─────────────────────────────────────────────────────────────────────────────

fn typography(values: &ResolvedValues) -> Vec<Element> {
    let families = category("Font Families").children(FONT_FAMILIES.iter().map(|f| {
        el("div")
            .class("font-family-row")
            .child(
                el("div")
                    .class("font-family-sample")
                    .var("font-family", f.token)
                    .text(IROHA),
            )
            .child(
                el("div")
                    .class("font-family-sample")
                    .var("font-family", f.token)
                    .text(format!("{}: {}", f.label, PANGRAM)),
            )
            .child(var_label(f.token, values))
    }));

    let weights = category("Font Weights").child(el("div").class("font-weight-grid").children(
        FONT_WEIGHTS.iter().map(|w| {
            el("div")
                .class("font-weight-box")
                .child(
                    el("div")
                        .class("font-weight-sample")
                        .var("font-weight", w.token)
                        .text(format!("{}: Aa Bb 漢字", w.label)),
                )
                .child(var_label(w.token, values))
        }),
    ));

    let headings = category("Heading Scale")
        .children(HEADING_SCALE.iter().map(|e| type_scale_row(e, values)));
    let text =
        category("Text Scale").children(TEXT_SCALE.iter().map(|e| type_scale_row(e, values)));

    vec![families, weights, headings, text]
}

fn type_scale_row(entry: &TypeScaleEntry, values: &ResolvedValues) -> Element {
    let sample = |content: String| {
        el("div")
            .class("type-scale-sample")
            .var("font-size", entry.size)
            .var("line-height", entry.line_height)
            .text(content)
    };

    el("div")
        .class("type-scale-row")
        .child(
            el("div")
                .class("type-scale-samples")
                .child(sample(format!("{} — {}", entry.label, SCALE_SAMPLE_EN)))
                .child(sample(format!("{} — {}", entry.label, SCALE_SAMPLE_JA))),
        )
        .child(
            el("div")
                .class("type-scale-meta")
                .child(var_label(entry.size, values))
                .child(var_label(entry.line_height, values)),
        )
}

// ─────────────────────────────────────────────────────────────────────────────
// Visual
// ─────────────────────────────────────────────────────────────────────────────

fn visual(values: &ResolvedValues) -> Vec<Element> {
    let radii = category("Border Radius").child(visual_grid(
        BORDER_RADII,
        RADIUS_PREFIX,
        "radius-box",
        "border-radius",
        values,
    ));

    let width = category("Border Width").child(
        el("div")
            .class("var-row")
            .child(el("div").class("bw-box").var("border-width", BORDER_WIDTH))
            .child(var_label(BORDER_WIDTH, values)),
    );

    let shadows = category("Shadows").child(visual_grid(
        SHADOWS,
        SHADOW_PREFIX,
        "shadow-box",
        "box-shadow",
        values,
    ));

    vec![radii, width, shadows]
}

fn visual_grid(
    tokens: &[&'static str],
    prefix: &str,
    box_class: &'static str,
    property: &'static str,
    values: &ResolvedValues,
) -> Element {
    el("div").class("visual-grid").children(tokens.iter().map(|&token| {
        el("div")
            .class("visual-item")
            .child(el("div").class(box_class).var(property, token))
            .child(
                el("div")
                    .class("visual-label")
                    .text(schema::display_name(token, prefix)),
            )
            .child(el("div").class("visual-value").text(values.get(token)))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::UNSET;
    use crate::theme::{Environment, TokenSheet};
    use crate::view::node::walk_nodes;

    fn bundled_values() -> ResolvedValues {
        ResolvedValues::capture(&Environment::standalone())
    }

    fn titles(block: &Node) -> Vec<String> {
        block
            .as_element()
            .unwrap()
            .find_all_class("category-title")
            .into_iter()
            .map(|e| e.text_content())
            .collect()
    }

    #[test]
    fn test_three_category_blocks_in_order() {
        let nodes = render_variables(&bundled_values());
        assert_eq!(nodes.len(), 3);
        assert_eq!(titles(&nodes[0]), vec!["Color Groups"]);
        assert_eq!(
            titles(&nodes[1]),
            vec!["Font Families", "Font Weights", "Heading Scale", "Text Scale"]
        );
        assert_eq!(titles(&nodes[2]), vec!["Border Radius", "Border Width", "Shadows"]);
    }

    #[test]
    fn test_card_references_only_group_tokens() {
        let values = bundled_values();
        for group in COLOR_GROUPS {
            let card = color_group_card(group, &values);
            let mut refs = card.inline_token_refs();
            refs.sort();
            refs.dedup();
            let mut expected = group.tokens();
            expected.sort();
            assert_eq!(refs, expected, "card for {}", group.name);
        }
    }

    #[test]
    fn test_ring_sample_only_when_declared() {
        let values = bundled_values();
        let ghost = color_group_card(schema::color_group("ghost").unwrap(), &values);
        assert!(ghost.find_class("color-group-ring").is_none());
        assert_eq!(ghost.find_all_class("var-meta").len(), 3);

        let info = color_group_card(schema::color_group("info").unwrap(), &values);
        let ring = info.find_class("color-group-ring").unwrap();
        assert_eq!(ring.text_content(), "Click to focus");
        assert_eq!(info.find_all_class("var-meta").len(), 4);
    }

    #[test]
    fn test_missing_danger_background_shows_unset_row() {
        let sheet = TokenSheet::bundled().without_token("--color-background-danger");
        let values = ResolvedValues::capture(&Environment::new(sheet));
        let card = color_group_card(schema::color_group("danger").unwrap(), &values);

        assert_eq!(card.find_class("color-group-label").unwrap().text_content(), "Danger");
        assert_eq!(
            card.find_class("color-group-desc").unwrap().text_content(),
            "Errors, destructive actions, validation failures"
        );
        let row = card
            .find_all_class("var-meta")
            .into_iter()
            .find(|r| r.text_content().starts_with("--color-background-danger"))
            .unwrap();
        let value = row.find_class("var-value").unwrap();
        assert_eq!(value.text_content(), UNSET);
        assert!(value.has_class("var-unset"));
        assert!(card.find_all_class("var-unset").len() == 1);
    }

    #[test]
    fn test_alert_text_uses_group_name() {
        let values = bundled_values();
        let card = color_group_card(schema::color_group("warning").unwrap(), &values);
        assert_eq!(
            card.find_class("color-group-alert").unwrap().text_content(),
            "This is a warning alert message."
        );
    }

    #[test]
    fn test_visual_labels_strip_prefix() {
        let nodes = render_variables(&bundled_values());
        let labels: Vec<String> = walk_nodes(&nodes[2..])
            .into_iter()
            .filter(|e| e.has_class("visual-label"))
            .map(|e| e.text_content())
            .collect();
        assert_eq!(
            labels,
            vec!["xs", "sm", "md", "lg", "xl", "full", "hairline", "sm", "md", "lg"]
        );
    }

    #[test]
    fn test_every_inline_reference_is_schema_token() {
        let nodes = render_variables(&bundled_values());
        for element in walk_nodes(&nodes) {
            for token in element.inline_token_refs() {
                assert!(schema::contains(token), "unknown token {}", token);
            }
        }
    }

    #[test]
    fn test_type_scale_samples() {
        let nodes = render_variables(&bundled_values());
        let samples: Vec<String> = walk_nodes(&nodes[1..2])
            .into_iter()
            .filter(|e| e.has_class("type-scale-sample"))
            .map(|e| e.text_content())
            .collect();
        // Two samples per entry, heading scale first
        assert_eq!(samples.len(), (HEADING_SCALE.len() + TEXT_SCALE.len()) * 2);
        assert_eq!(samples[0], "Heading XS — The quick brown fox");
        assert_eq!(samples[1], "Heading XS — 素早い茶色の狐が怠惰な犬を飛び越える");
    }
}
