//! Storage provider trait for pluggable upload storage backends.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// A byte stream type used for reading stored file contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Trait for upload storage backends.
///
/// The trait is defined here in `cms-core` and implemented in
/// `cms-storage`; services depend only on the trait so the backing
/// store can be swapped out.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read a stored file and return its byte stream.
    async fn read(&self, path: &str) -> AppResult<ByteStream>;

    /// Write bytes to a file at the given relative path.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Delete a file at the given relative path.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether a file exists at the given relative path.
    async fn exists(&self, path: &str) -> AppResult<bool>;
}
