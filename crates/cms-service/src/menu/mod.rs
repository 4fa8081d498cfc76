//! Menu hierarchy services.

pub mod seed;
pub mod service;
pub mod tree;

pub use service::{CreateMenuRequest, MenuService, SortOrderUpdate};
pub use tree::MenuTreeService;
