//! Content services.

pub mod service;

pub use service::{ContentService, CreateContentRequest};
