// Terminal renderer - presentation tree -> styled ratatui lines
//
// Block elements start a new line, inline elements flow. Foreground,
// background and weight come from the shared cascade and are inherited by
// children the way CSS inherits them. Buttons are drawn as `[ label ]` with
// the brackets in the element's focus-ring color, so ring tokens are visible
// without focus.

use super::computed::computed_property;
use crate::theme::color::parse_css_color;
use crate::theme::Environment;
use crate::view::node::{Element, Node};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const BLOCK_TAGS: &[&str] = &[
    "div", "section", "p", "pre", "h1", "h2", "h3", "header", "main", "nav",
];

/// Inherited presentation state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Inherited {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
    italic: bool,
    dim: bool,
}

impl Inherited {
    fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }
}

fn is_bold(weight: &str) -> bool {
    match weight.trim() {
        "bold" | "bolder" => true,
        other => other.parse::<u16>().map(|w| w >= 600).unwrap_or(false),
    }
}

struct LineWriter<'a> {
    env: &'a Environment,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl<'a> LineWriter<'a> {
    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }

    fn blank(&mut self) {
        self.flush();
        if self.lines.last().map(|l| !l.spans.is_empty()).unwrap_or(false) {
            self.lines.push(Line::default());
        }
    }

    fn push(&mut self, text: &str, style: Style) {
        if !text.is_empty() {
            self.current.push(Span::styled(text.to_string(), style));
        }
    }

    fn color(&self, element: &Element, property: &str) -> Option<Color> {
        computed_property(element, property, self.env)
            .and_then(|v| parse_css_color(&v, self.env.theme()))
    }

    fn resolve(&self, element: &Element, parent: Inherited) -> Inherited {
        Inherited {
            fg: self.color(element, "color").or(parent.fg),
            bg: self.color(element, "background").or(parent.bg),
            bold: computed_property(element, "font-weight", self.env)
                .map(|w| is_bold(&w))
                .unwrap_or(parent.bold),
            italic: computed_property(element, "font-style", self.env)
                .map(|s| s.trim() == "italic")
                .unwrap_or(parent.italic),
            dim: parent.dim || element.get_attr("disabled").is_some(),
        }
    }

    fn node(&mut self, node: &Node, parent: Inherited) {
        match node {
            Node::Text(text) => {
                for (i, part) in text.split('\n').enumerate() {
                    if i > 0 {
                        self.flush();
                    }
                    self.push(part, parent.style());
                }
            }
            Node::Element(element) => self.element(element, parent),
        }
    }

    fn element(&mut self, element: &Element, parent: Inherited) {
        let inherited = self.resolve(element, parent);
        let block = BLOCK_TAGS.contains(&element.tag);

        if element.tag == "section" {
            self.blank();
        } else if block {
            self.flush();
        }

        if element.tag == "button" {
            let ring = self
                .color(element, "outline-color")
                .map(|c| Style::default().fg(c).add_modifier(Modifier::BOLD))
                .unwrap_or_else(|| inherited.style());
            self.push("[ ", ring);
            for child in &element.children {
                self.node(child, inherited);
            }
            self.push(" ]", ring);
            self.push(" ", parent.style());
        } else {
            for child in &element.children {
                self.node(child, inherited);
            }
            if !block {
                self.push(" ", parent.style());
            }
        }

        if block {
            self.flush();
        }
    }
}

/// Styled lines for a list of root nodes
pub fn render_lines(nodes: &[Node], env: &Environment) -> Vec<Line<'static>> {
    let mut writer = LineWriter {
        env,
        lines: Vec::new(),
        current: Vec::new(),
    };
    for node in nodes {
        writer.node(node, Inherited::default());
    }
    writer.flush();
    writer.lines
}
