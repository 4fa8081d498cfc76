//! # cms-service
//!
//! Business logic for the memorial CMS. Services orchestrate the
//! repositories, the storage provider, and the auth primitives; the HTTP
//! layer in `cms-api` stays a thin translation over this crate.

pub mod auth;
pub mod content;
pub mod context;
pub mod menu;
pub mod upload;

pub use context::RequestContext;
