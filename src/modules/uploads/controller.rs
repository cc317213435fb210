use axum::{
    Json,
    extract::{Multipart, Query, State},
};
use tracing::instrument;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{UploadCategory, UploadParams, UploadResponse, UploadedFile};
use super::service::UploadService;

/// Upload a profile photo (JPG, JPEG, PNG only, max 1MB)
#[utoipa::path(
    post,
    path = "/uploads/Unggah/photo",
    params(UploadParams),
    responses(
        (status = 200, description = "Photo uploaded successfully", body = UploadResponse),
        (status = 400, description = "Invalid file type or size", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Uploads"
)]
#[instrument(skip(state, multipart))]
pub async fn upload_photo(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(params): Query<UploadParams>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let file = read_file_field(multipart).await?;

    let upload = UploadService::store_upload(
        &state.db,
        &state.storage,
        UploadCategory::Photo,
        &current_user,
        params.user_id,
        file,
    )
    .await?;

    Ok(Json(UploadResponse {
        message: "photo uploaded successfully".to_string(),
        data: upload,
    }))
}

/// Upload a certificate (PDF only, max 2MB)
#[utoipa::path(
    post,
    path = "/uploads/Unggah/certificate",
    params(UploadParams),
    responses(
        (status = 200, description = "Certificate uploaded successfully", body = UploadResponse),
        (status = 400, description = "Invalid file type or size", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Uploads"
)]
#[instrument(skip(state, multipart))]
pub async fn upload_certificate(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(params): Query<UploadParams>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let file = read_file_field(multipart).await?;

    let upload = UploadService::store_upload(
        &state.db,
        &state.storage,
        UploadCategory::Certificate,
        &current_user,
        params.user_id,
        file,
    )
    .await?;

    Ok(Json(UploadResponse {
        message: "certificate uploaded successfully".to_string(),
        data: upload,
    }))
}

/// Pulls the single `file` field out of the multipart body.
async fn read_file_field(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::bad_request(anyhow::anyhow!("file not found")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(|name| name.to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("file not found")))?;
        let content_type = field
            .content_type()
            .map(|ct| ct.to_string())
            .unwrap_or_default();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| AppError::bad_request(anyhow::anyhow!("file not found")))?;

        return Ok(UploadedFile {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Err(AppError::bad_request(anyhow::anyhow!("file not found")))
}
