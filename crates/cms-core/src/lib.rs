//! # cms-core
//!
//! Core crate for the memorial-foundation CMS backend. Contains the
//! configuration schemas, pagination types, the storage provider trait,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other CMS crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
