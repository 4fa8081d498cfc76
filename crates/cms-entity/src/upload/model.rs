//! File upload entity model.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::category::UploadCategory;

/// A record of an uploaded file stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileUpload {
    /// Unique upload identifier.
    pub id: i32,
    /// Original client-side file name.
    pub original_name: String,
    /// Generated unique stored file name.
    pub file_name: String,
    /// Path relative to the storage root.
    pub file_path: String,
    /// MIME type reported at upload time.
    pub mime_type: String,
    /// File size in bytes.
    pub file_size: i64,
    /// Content item this file is attached to (optional).
    pub content_id: Option<i32>,
    /// Category derived from the MIME type.
    pub category: UploadCategory,
    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

/// Data required to create a new upload record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFileUpload {
    /// Original client-side file name.
    pub original_name: String,
    /// Generated unique stored file name.
    pub file_name: String,
    /// Path relative to the storage root.
    pub file_path: String,
    /// MIME type.
    pub mime_type: String,
    /// File size in bytes.
    pub file_size: i64,
    /// Content item this file is attached to (optional).
    pub content_id: Option<i32>,
    /// Derived category.
    pub category: UploadCategory,
}

/// Aggregate statistics over all stored uploads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadStats {
    /// Total number of stored files.
    pub total_files: u64,
    /// Total size of all stored files in bytes.
    pub total_size: u64,
    /// File count per category.
    pub categories: HashMap<String, u64>,
}
