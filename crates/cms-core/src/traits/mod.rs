//! Traits implemented by other CMS crates.

pub mod storage;

pub use storage::{ByteStream, StorageProvider};
