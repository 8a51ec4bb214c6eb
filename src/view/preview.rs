//! Preview tab - fixed component compositions styled through tokens
//!
//! Nothing here reads a value. Cards, badges and buttons get their look from
//! stylesheet classes; focus-ring colors are wired per element through the
//! private `--_ring-color` property.

use super::node::{el, Element, Node};

const RING_COLOR: &str = "--_ring-color";

struct CardLevel {
    class: &'static str,
    level: &'static str,
    label: &'static str,
    label_ja: &'static str,
}

const CARD_LEVELS: &[CardLevel] = &[
    CardLevel {
        class: "card-primary",
        level: "primary",
        label: "Primary background",
        label_ja: "プライマリ背景",
    },
    CardLevel {
        class: "card-secondary",
        level: "secondary",
        label: "Secondary background",
        label_ja: "セカンダリ背景",
    },
    CardLevel {
        class: "card-tertiary",
        level: "tertiary",
        label: "Tertiary background",
        label_ja: "ターシャリ背景",
    },
];

/// (class, English, Japanese)
const BADGES: &[(&str, &str, &str)] = &[
    ("badge-info", "Info", "情報"),
    ("badge-success", "Success", "成功"),
    ("badge-warning", "Warning", "警告"),
    ("badge-danger", "Danger", "危険"),
];

struct ButtonVariant {
    class: &'static str,
    name: &'static str,
    ring: Option<&'static str>,
    label: &'static str,
    disabled: bool,
}

const BUTTONS: &[ButtonVariant] = &[
    ButtonVariant {
        class: "btn-primary",
        name: "primary",
        ring: Some("--color-ring-primary"),
        label: "Primary / 送信",
        disabled: false,
    },
    ButtonVariant {
        class: "btn-ghost",
        name: "ghost",
        ring: Some("--color-ring-primary"),
        label: "Ghost / キャンセル",
        disabled: false,
    },
    ButtonVariant {
        class: "btn-info",
        name: "info",
        ring: Some("--color-ring-info"),
        label: "Info / 情報",
        disabled: false,
    },
    ButtonVariant {
        class: "btn-success",
        name: "success",
        ring: Some("--color-ring-success"),
        label: "Success / 成功",
        disabled: false,
    },
    ButtonVariant {
        class: "btn-warning",
        name: "warning",
        ring: Some("--color-ring-warning"),
        label: "Warning / 警告",
        disabled: false,
    },
    ButtonVariant {
        class: "btn-danger",
        name: "danger",
        ring: Some("--color-ring-danger"),
        label: "Danger / 削除",
        disabled: false,
    },
    ButtonVariant {
        class: "btn-disabled",
        name: "disabled",
        ring: None,
        label: "Disabled / 無効",
        disabled: true,
    },
];

/// (name, ring token)
const RINGS: &[(&str, &str)] = &[
    ("primary", "--color-ring-primary"),
    ("secondary", "--color-ring-secondary"),
    ("inverse", "--color-ring-inverse"),
    ("info", "--color-ring-info"),
    ("danger", "--color-ring-danger"),
    ("success", "--color-ring-success"),
    ("warning", "--color-ring-warning"),
];

const LIST_ITEMS: &[&str] = &[
    "First list item / リスト項目 1",
    "Second list item / リスト項目 2",
    "Third list item / リスト項目 3",
    "Fourth list item / リスト項目 4",
];

/// Render the Preview tab
pub fn render_preview() -> Vec<Node> {
    vec![
        typography().into(),
        cards().into(),
        badges().into(),
        buttons().into(),
        bordered_list().into(),
        rings().into(),
    ]
}

fn section(title: &'static str) -> Element {
    el("section")
        .class("preview-section")
        .child(el("h2").class("preview-section-title").text(title))
}

fn typography() -> Element {
    let pair = |class: &'static str, en: &'static str, ja: &'static str| {
        [el("div").class(class).text(en), el("div").class(class).text(ja)]
    };
    let para = |class: &'static str, en: &'static str, ja: &'static str| {
        [el("p").class(class).text(en), el("p").class(class).text(ja)]
    };

    section("Typography")
        .children(pair("preview-h1", "Heading 1 — 3XL", "見出し1 — 3XL"))
        .children(pair("preview-h2", "Heading 2 — 2XL", "見出し2 — 2XL"))
        .children(pair("preview-h3", "Heading 3 — XL", "見出し3 — XL"))
        .children(para(
            "preview-body",
            "Body text using the primary text color. This demonstrates the default reading experience with the host theme.",
            "本文テキスト。ホストテーマによるデフォルトの読書体験を示しています。日本語の長文がどのように表示されるかを確認できます。",
        ))
        .children(para(
            "preview-secondary",
            "Secondary text for supplemental information, labels, and captions.",
            "補足情報やラベル、キャプション向けのセカンダリテキスト。",
        ))
        .child(
            el("pre")
                .class("preview-code")
                .text("const theme = app.getHostContext();\nconsole.log(\"Theme:\", theme);"),
        )
}

fn cards() -> Element {
    section("Cards").child(el("div").class("card-stack").children(CARD_LEVELS.iter().map(
        |c| {
            el("div")
                .class("card")
                .class(c.class)
                .child(el("div").class("card-title").text(c.label))
                .child(
                    el("div")
                        .class("card-text")
                        .text(format!("This card uses var(--color-background-{}).", c.level)),
                )
                .child(
                    el("div")
                        .class("card-text")
                        .text(format!("{}を使用したカードです。", c.label_ja)),
                )
        },
    )))
}

fn badges() -> Element {
    section("Status Badges").child(el("div").class("badge-row").children(
        BADGES.iter().flat_map(|&(class, en, ja)| {
            [
                el("span").class("badge").class(class).text(en),
                el("span").class("badge").class(class).text(ja),
            ]
        }),
    ))
}

fn buttons() -> Element {
    section("Buttons").child(el("div").class("button-list").children(BUTTONS.iter().map(
        |b| {
            let mut button = el("button")
                .class("btn")
                .class(b.class)
                .attr("type", "button");
            if b.disabled {
                button = button.attr("disabled", "");
            }
            if let Some(ring) = b.ring {
                button = button.var(RING_COLOR, ring);
            }
            el("div")
                .class("button-list-item")
                .child(button.text(b.label))
                .child(el("span").class("button-list-label").text(b.name))
        },
    )))
}

fn bordered_list() -> Element {
    section("Bordered List").child(
        el("div")
            .class("bordered-list")
            .children(LIST_ITEMS.iter().map(|t| el("div").class("bordered-list-item").text(*t))),
    )
}

fn rings() -> Element {
    section("Focus Rings").child(el("div").class("ring-demo").children(RINGS.iter().map(
        |&(name, token)| {
            el("button")
                .class("ring-box")
                .attr("type", "button")
                .attr("data-ring", name)
                .var(RING_COLOR, token)
                .text(name)
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use crate::view::node::{find_class, walk_nodes, StyleValue};

    #[test]
    fn test_six_sections_in_order() {
        let nodes = render_preview();
        let titles: Vec<String> = walk_nodes(&nodes)
            .into_iter()
            .filter(|e| e.has_class("preview-section-title"))
            .map(|e| e.text_content())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Typography",
                "Cards",
                "Status Badges",
                "Buttons",
                "Bordered List",
                "Focus Rings"
            ]
        );
    }

    #[test]
    fn test_disabled_button_has_no_ring() {
        let nodes = render_preview();
        let disabled = find_class(&nodes, "btn-disabled").unwrap();
        assert_eq!(disabled.get_attr("disabled"), Some(""));
        assert!(disabled.inline_style(RING_COLOR).is_none());

        let ghost = find_class(&nodes, "btn-ghost").unwrap();
        assert_eq!(
            ghost.inline_style(RING_COLOR),
            Some(&StyleValue::Token("--color-ring-primary"))
        );
        assert!(ghost.get_attr("disabled").is_none());
    }

    #[test]
    fn test_ring_swatches() {
        let nodes = render_preview();
        let swatches: Vec<_> = walk_nodes(&nodes)
            .into_iter()
            .filter(|e| e.has_class("ring-box"))
            .collect();
        let names: Vec<String> = swatches.iter().map(|e| e.text_content()).collect();
        assert_eq!(
            names,
            vec!["primary", "secondary", "inverse", "info", "danger", "success", "warning"]
        );
        for swatch in swatches {
            assert_eq!(swatch.tag, "button");
            assert_eq!(swatch.get_attr("type"), Some("button"));
        }
    }

    #[test]
    fn test_badges_come_in_language_pairs() {
        let nodes = render_preview();
        let badges: Vec<String> = walk_nodes(&nodes)
            .into_iter()
            .filter(|e| e.has_class("badge"))
            .map(|e| e.text_content())
            .collect();
        assert_eq!(
            badges,
            vec!["Info", "情報", "Success", "成功", "Warning", "警告", "Danger", "危険"]
        );
    }

    #[test]
    fn test_inline_references_are_schema_tokens() {
        for element in walk_nodes(&render_preview()) {
            for token in element.inline_token_refs() {
                assert!(schema::contains(token), "unknown token {}", token);
            }
        }
    }

    #[test]
    fn test_card_text_names_background_token() {
        let nodes = render_preview();
        let card = find_class(&nodes, "card-tertiary").unwrap();
        let text = card.text_content();
        assert!(text.starts_with("Tertiary background"));
        assert!(text.contains("This card uses var(--color-background-tertiary)."));
        assert!(text.contains("ターシャリ背景を使用したカードです。"));
    }
}
