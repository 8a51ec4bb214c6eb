//! Renderers - materialize presentation trees into a target
//!
//! Views only produce [`Node`]s; a [`PresentationTarget`] decides what to do
//! with them. The controller clears the target and appends a full tab's worth
//! of nodes on every render.

pub mod computed;
pub mod html;
pub mod stylesheet;
pub mod terminal;

pub use html::{render_document, HtmlTarget};

use crate::view::Node;

/// Where rendered content goes
pub trait PresentationTarget {
    /// Remove all previously appended content
    fn clear(&mut self);
    /// Append one root node
    fn append(&mut self, node: &Node);
}

/// Keeps the nodes themselves (terminal front-end, tests)
#[derive(Debug, Default)]
pub struct MemoryTarget {
    nodes: Vec<Node>,
    renders: usize,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Times the target has been cleared (one per full render)
    #[cfg(test)]
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl PresentationTarget for MemoryTarget {
    fn clear(&mut self) {
        self.nodes.clear();
        self.renders += 1;
    }

    fn append(&mut self, node: &Node) {
        self.nodes.push(node.clone());
    }
}
