//! Presentation tree
//!
//! Views build plain trees of [`Node`]s; renderers decide what to do with
//! them. Style declarations keep token references symbolic
//! ([`StyleValue::Token`]) so that every renderer resolves them through the
//! same cascade.

/// A node in the presentation tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    #[cfg(test)]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// Value side of an inline style declaration
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// `var(--token)`
    Token(&'static str),
    /// Anything else, copied verbatim
    Literal(String),
}

impl StyleValue {
    /// CSS source text for this value
    pub fn to_css(&self) -> String {
        match self {
            StyleValue::Token(token) => format!("var({})", token),
            StyleValue::Literal(value) => value.clone(),
        }
    }
}

/// `property: value`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: StyleValue,
}

/// An element with classes, inline styles, attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<&'static str>,
    pub styles: Vec<Declaration>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// Start building an element
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        classes: Vec::new(),
        styles: Vec::new(),
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// Text node
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

impl Element {
    // ─────────────────────────────────────────────────────────────────────────
    // Builder
    // ─────────────────────────────────────────────────────────────────────────

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    /// `property: var(token)`
    pub fn var(mut self, property: &'static str, token: &'static str) -> Self {
        self.styles.push(Declaration {
            property,
            value: StyleValue::Token(token),
        });
        self
    }

    /// `property: value` with a literal value
    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.push(Declaration {
            property,
            value: StyleValue::Literal(value.into()),
        });
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.children.push(Node::Text(content.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    #[cfg(test)]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Inline declaration for a property (last one wins, as in CSS)
    pub fn inline_style(&self, property: &str) -> Option<&StyleValue> {
        self.styles
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| &d.value)
    }
}

// Tree queries for view tests
#[cfg(test)]
impl Element {
    /// Child elements, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Depth-first walk over this element and every descendant element
    pub fn walk(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in self.child_elements() {
            out.extend(child.walk());
        }
        out
    }

    /// Concatenated text of the subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => out.push_str(&e.text_content()),
            }
        }
        out
    }

    /// First element in this subtree (self included) carrying `class`
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        self.walk().into_iter().find(|e| e.has_class(class))
    }

    /// Every element in this subtree carrying `class`
    pub fn find_all_class(&self, class: &str) -> Vec<&Element> {
        self.walk()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// Token references in inline styles across the subtree, in document order
    pub fn inline_token_refs(&self) -> Vec<&'static str> {
        self.walk()
            .into_iter()
            .flat_map(|e| e.styles.iter())
            .filter_map(|d| match d.value {
                StyleValue::Token(token) => Some(token),
                StyleValue::Literal(_) => None,
            })
            .collect()
    }

    /// Every class used in the subtree
    pub fn classes_used(&self) -> Vec<&'static str> {
        self.walk()
            .into_iter()
            .flat_map(|e| e.classes.iter().copied())
            .collect()
    }
}

/// Elements across a list of root nodes
#[cfg(test)]
pub fn walk_nodes(nodes: &[Node]) -> Vec<&Element> {
    nodes
        .iter()
        .filter_map(Node::as_element)
        .flat_map(Element::walk)
        .collect()
}

/// First element carrying `class` across a list of root nodes
#[cfg(test)]
pub fn find_class<'a>(nodes: &'a [Node], class: &str) -> Option<&'a Element> {
    walk_nodes(nodes).into_iter().find(|e| e.has_class(class))
}
