//! # cms-api
//!
//! HTTP layer for the memorial CMS: the Axum router, application state,
//! request DTOs, auth and pagination extractors, and the error-to-response
//! mapping. Handlers stay thin; every business decision lives in
//! `cms-service`.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use state::AppState;
