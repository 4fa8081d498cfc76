//! File upload entity and related enums.

pub mod category;
pub mod model;

pub use category::UploadCategory;
pub use model::{CreateFileUpload, FileUpload, UploadStats};
