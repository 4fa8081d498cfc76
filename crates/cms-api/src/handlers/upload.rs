//! Upload handlers — multipart intake, listing, serving, deletion.

use axum::body::Body;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::header;
use axum::response::Response;
use axum::Json;

use cms_core::error::AppError;
use cms_entity::upload::model::{FileUpload, UploadStats};
use cms_service::upload::service::StoreUploadParams;

use crate::dto::request::UploadQuery;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/uploads
///
/// Accepts one multipart part named `file`.
pub async fn upload_single(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<FileUpload>>, ApiError> {
    while let Some(field) = next_field(&mut multipart).await? {
        if field.name() != Some("file") {
            continue;
        }
        let params = read_field(field, query.content_id).await?;
        let upload = state.upload_service.store(params).await?;
        return Ok(Json(ApiResponse::ok(upload)));
    }

    Err(AppError::validation("Missing multipart field 'file'").into())
}

/// POST /api/uploads/batch
///
/// Accepts multipart parts named `files`; all are stored, independently
/// and concurrently.
pub async fn upload_batch(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<Vec<FileUpload>>>, ApiError> {
    let mut items = Vec::new();
    while let Some(field) = next_field(&mut multipart).await? {
        if field.name() != Some("files") {
            continue;
        }
        items.push(read_field(field, query.content_id).await?);
    }

    let uploads = state.upload_service.store_many(items).await?;
    Ok(Json(ApiResponse::ok(uploads)))
}

/// GET /api/uploads
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
) -> Result<Json<ApiResponse<Vec<FileUpload>>>, ApiError> {
    let uploads = state.upload_service.find_all(query.category).await?;
    Ok(Json(ApiResponse::ok(uploads)))
}

/// GET /api/uploads/stats
pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UploadStats>>, ApiError> {
    let stats = state.upload_service.stats().await?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// GET /api/uploads/content/{content_id}
pub async fn by_content(
    State(state): State<AppState>,
    Path(content_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<FileUpload>>>, ApiError> {
    let uploads = state.upload_service.find_by_content_id(content_id).await?;
    Ok(Json(ApiResponse::ok(uploads)))
}

/// GET /api/uploads/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<FileUpload>>, ApiError> {
    let upload = state.upload_service.find_one(id).await?;
    Ok(Json(ApiResponse::ok(upload)))
}

/// GET /api/uploads/{id}/serve
///
/// Streams the stored bytes inline.
pub async fn serve(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    stream_upload(&state, id, "inline").await
}

/// GET /api/uploads/{id}/download
///
/// Streams the stored bytes as an attachment.
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    stream_upload(&state, id, "attachment").await
}

/// DELETE /api/uploads/{id}
pub async fn remove(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.upload_service.remove(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("File {id} deleted"),
    })))
}

async fn next_field(
    multipart: &mut Multipart,
) -> Result<Option<axum::extract::multipart::Field<'_>>, ApiError> {
    multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")).into())
}

async fn read_field(
    field: axum::extract::multipart::Field<'_>,
    content_id: Option<i32>,
) -> Result<StoreUploadParams, ApiError> {
    let original_name = field.file_name().unwrap_or("unnamed").to_string();
    let mime_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::validation(format!("Failed to read uploaded file: {e}")))?;

    Ok(StoreUploadParams {
        original_name,
        mime_type,
        data,
        content_id,
    })
}

async fn stream_upload(
    state: &AppState,
    id: i32,
    disposition: &str,
) -> Result<Response, ApiError> {
    let (upload, stream) = state.upload_service.open(id).await?;

    Response::builder()
        .header(header::CONTENT_TYPE, upload.mime_type.as_str())
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition(disposition, &upload.original_name),
        )
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::internal(format!("Failed to build response: {e}")).into())
}

/// Build a Content-Disposition value with an ASCII-safe filename.
fn content_disposition(kind: &str, original_name: &str) -> String {
    let safe: String = original_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{kind}; filename=\"{safe}\"")
}

#[cfg(test)]
mod tests {
    use super::content_disposition;

    #[test]
    fn test_content_disposition_sanitizes_names() {
        assert_eq!(
            content_disposition("inline", "report 2024.pdf"),
            "inline; filename=\"report 2024.pdf\""
        );
        // Non-ASCII and quote characters may not appear in the header value.
        let value = content_disposition("attachment", "사진\"자료.jpg");
        assert!(value.is_ascii());
        assert!(!value.contains("\"사"));
    }
}
