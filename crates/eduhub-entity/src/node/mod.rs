//! Content-tree node entities.

pub mod model;
pub mod section;

pub use model::{Node, NodeKind, SelectState};
pub use section::{SectionKind, SectionSet};
