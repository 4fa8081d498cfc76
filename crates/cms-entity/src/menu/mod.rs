//! Navigation menu entity and tree structures.

pub mod kind;
pub mod model;
pub mod tree;

pub use kind::MenuKind;
pub use model::{CreateMenu, Menu, UpdateMenu};
pub use tree::MenuTreeNode;
