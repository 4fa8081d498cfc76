//! File upload storage and record management.

use std::sync::Arc;

use bytes::Bytes;
use futures::future::join_all;
use tracing::{info, warn};

use cms_core::config::StorageConfig;
use cms_core::error::{AppError, ErrorKind};
use cms_core::traits::storage::{ByteStream, StorageProvider};
use cms_database::repositories::upload::UploadRepository;
use cms_entity::upload::model::{CreateFileUpload, FileUpload, UploadStats};
use cms_entity::upload::UploadCategory;
use cms_storage::naming::stored_file_name;

/// A single file received from a multipart upload.
#[derive(Debug, Clone)]
pub struct StoreUploadParams {
    /// Client-side file name.
    pub original_name: String,
    /// Reported MIME type.
    pub mime_type: String,
    /// File content bytes.
    pub data: Bytes,
    /// Content item to attach the file to (optional).
    pub content_id: Option<i32>,
}

/// Stores uploaded files on disk and manages their records.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// Upload record repository.
    upload_repo: Arc<UploadRepository>,
    /// Storage backend for file bytes.
    storage: Arc<dyn StorageProvider>,
    /// Storage configuration.
    config: StorageConfig,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        upload_repo: Arc<UploadRepository>,
        storage: Arc<dyn StorageProvider>,
        config: StorageConfig,
    ) -> Self {
        Self {
            upload_repo,
            storage,
            config,
        }
    }

    /// Stores one uploaded file and creates its record.
    pub async fn store(&self, params: StoreUploadParams) -> Result<FileUpload, AppError> {
        if params.data.is_empty() {
            return Err(AppError::validation("Uploaded file is empty"));
        }
        if params.data.len() as u64 > self.config.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds maximum upload size of {} bytes",
                self.config.max_upload_size_bytes
            )));
        }

        let file_name = stored_file_name(&params.original_name);
        let file_size = params.data.len() as i64;
        self.storage.write(&file_name, params.data).await?;

        let record = CreateFileUpload {
            original_name: params.original_name,
            file_path: file_name.clone(),
            file_name,
            mime_type: params.mime_type.clone(),
            file_size,
            content_id: params.content_id,
            category: UploadCategory::from_mime(&params.mime_type),
        };

        let upload = match self.upload_repo.create(&record).await {
            Ok(upload) => upload,
            Err(e) => {
                // The stored bytes are unreachable without a record.
                if let Err(cleanup) = self.storage.delete(&record.file_path).await {
                    warn!(path = %record.file_path, error = %cleanup, "Failed to clean up stored file");
                }
                return Err(e);
            }
        };

        info!(
            upload_id = upload.id,
            original_name = %upload.original_name,
            category = %upload.category,
            size = upload.file_size,
            "File uploaded"
        );
        Ok(upload)
    }

    /// Stores a batch of uploaded files.
    ///
    /// The independent single-file stores are dispatched concurrently and
    /// all awaited; files stored before a failing one are kept (no
    /// rollback), and the first error is surfaced.
    pub async fn store_many(
        &self,
        items: Vec<StoreUploadParams>,
    ) -> Result<Vec<FileUpload>, AppError> {
        if items.is_empty() {
            return Err(AppError::validation("No files provided"));
        }
        if items.len() > self.config.max_batch_files {
            return Err(AppError::validation(format!(
                "At most {} files may be uploaded at once",
                self.config.max_batch_files
            )));
        }

        let results = join_all(items.into_iter().map(|item| self.store(item))).await;
        results.into_iter().collect()
    }

    /// Lists upload records, optionally restricted to one category.
    pub async fn find_all(
        &self,
        category: Option<UploadCategory>,
    ) -> Result<Vec<FileUpload>, AppError> {
        self.upload_repo.find_all(category).await
    }

    /// Gets an upload record by ID.
    pub async fn find_one(&self, id: i32) -> Result<FileUpload, AppError> {
        self.upload_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("File with ID {id} not found")))
    }

    /// Lists upload records attached to a content item.
    pub async fn find_by_content_id(&self, content_id: i32) -> Result<Vec<FileUpload>, AppError> {
        self.upload_repo.find_by_content_id(content_id).await
    }

    /// Aggregate statistics over all stored uploads.
    pub async fn stats(&self) -> Result<UploadStats, AppError> {
        self.upload_repo.stats().await
    }

    /// Opens the stored bytes of an upload for streaming to a client.
    pub async fn open(&self, id: i32) -> Result<(FileUpload, ByteStream), AppError> {
        let upload = self.find_one(id).await?;
        let stream = self.storage.read(&upload.file_path).await.map_err(|e| {
            if e.kind == ErrorKind::NotFound {
                AppError::not_found("File not found on disk")
            } else {
                e
            }
        })?;
        Ok((upload, stream))
    }

    /// Deletes an upload: the stored file best-effort, then the record.
    ///
    /// A file already missing from disk does not block record deletion.
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        let upload = self.find_one(id).await?;

        if let Err(e) = self.storage.delete(&upload.file_path).await {
            if e.kind != ErrorKind::NotFound {
                warn!(path = %upload.file_path, error = %e, "Failed to delete stored file");
            }
        }

        self.upload_repo.delete(id).await?;
        info!(upload_id = id, "Upload deleted");
        Ok(())
    }
}
