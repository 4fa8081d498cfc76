//! # cms-entity
//!
//! Domain entity models for the memorial CMS. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod content;
pub mod menu;
pub mod serde_util;
pub mod upload;
pub mod user;
