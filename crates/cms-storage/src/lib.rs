//! # cms-storage
//!
//! Upload storage backends for the memorial CMS. The only provider is the
//! local filesystem; the [`cms_core::traits::StorageProvider`] trait keeps
//! the seam open for remote backends.

pub mod local;
pub mod naming;

pub use local::LocalStorageProvider;
