//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// File upload storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for stored upload files.
    #[serde(default = "default_upload_root")]
    pub upload_root: String,
    /// Maximum upload size in bytes (default 10 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Maximum number of files accepted in one batch upload.
    #[serde(default = "default_max_batch")]
    pub max_batch_files: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_root: default_upload_root(),
            max_upload_size_bytes: default_max_upload(),
            max_batch_files: default_max_batch(),
        }
    }
}

fn default_upload_root() -> String {
    "data/uploads".to_string()
}

fn default_max_upload() -> u64 {
    10 * 1024 * 1024
}

fn default_max_batch() -> usize {
    10
}
