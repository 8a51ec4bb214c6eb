//! Presentation trees for the two tabs and the surrounding chrome

pub mod node;
pub mod preview;
pub mod shell;
pub mod variables;

pub use node::Node;
pub use preview::render_preview;
pub use variables::render_variables;
