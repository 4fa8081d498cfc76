//! Upload services.

pub mod service;

pub use service::{StoreUploadParams, UploadService};
