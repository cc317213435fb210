use alumnet_core::pagination::PaginationParams;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    CreatePekerjaanDto, PaginatedPekerjaanResponse, Pekerjaan, PekerjaanListResponse,
    PekerjaanMessageResponse, UpdatePekerjaanDto,
};
use super::service::PekerjaanService;

/// List employment records
#[utoipa::path(
    get,
    path = "/api/pekerjaan",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated list of employment records", body = PaginatedPekerjaanResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Pekerjaan"
)]
#[instrument(skip(state))]
pub async fn get_all_pekerjaan(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedPekerjaanResponse>, AppError> {
    let (pekerjaan, total) = PekerjaanService::get_all(&state.db, &params).await?;

    Ok(Json(PaginatedPekerjaanResponse {
        data: pekerjaan,
        meta: params.meta(total),
    }))
}

/// List the calling user's employment records
#[utoipa::path(
    get,
    path = "/api/pekerjaan/me",
    responses(
        (status = 200, description = "Employment records of the caller", body = PekerjaanListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Pekerjaan"
)]
#[instrument(skip(state))]
pub async fn get_my_pekerjaan(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<Json<PekerjaanListResponse>, AppError> {
    let pekerjaan = PekerjaanService::find_by_alumni_id(&state.db, current_user.id).await?;

    Ok(Json(PekerjaanListResponse {
        message: "Data pekerjaan berhasil diambil".to_string(),
        data: pekerjaan,
    }))
}

/// Get an employment record by id
#[utoipa::path(
    get,
    path = "/api/pekerjaan/{id}",
    params(("id" = Uuid, Path, description = "Pekerjaan ID")),
    responses(
        (status = 200, description = "Employment record details", body = Pekerjaan),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Pekerjaan not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Pekerjaan"
)]
#[instrument(skip(state))]
pub async fn get_pekerjaan_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Pekerjaan>, AppError> {
    let pekerjaan = PekerjaanService::find_by_id(&state.db, id).await?;
    Ok(Json(pekerjaan))
}

/// Create an employment record (admin only)
///
/// The record is owned by the creating caller's identity.
#[utoipa::path(
    post,
    path = "/api/pekerjaan",
    request_body = CreatePekerjaanDto,
    responses(
        (status = 201, description = "Employment record created", body = Pekerjaan),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Pekerjaan"
)]
#[instrument(skip(state, dto))]
pub async fn create_pekerjaan(
    State(state): State<AppState>,
    current_user: CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreatePekerjaanDto>,
) -> Result<(StatusCode, Json<Pekerjaan>), AppError> {
    let pekerjaan = PekerjaanService::create(&state.db, current_user.id, dto).await?;
    Ok((StatusCode::CREATED, Json(pekerjaan)))
}

/// Update an employment record (admin only)
#[utoipa::path(
    put,
    path = "/api/pekerjaan/{id}",
    params(("id" = Uuid, Path, description = "Pekerjaan ID")),
    request_body = UpdatePekerjaanDto,
    responses(
        (status = 200, description = "Employment record updated", body = PekerjaanMessageResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "Pekerjaan not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Pekerjaan"
)]
#[instrument(skip(state, dto))]
pub async fn update_pekerjaan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdatePekerjaanDto>,
) -> Result<Json<PekerjaanMessageResponse>, AppError> {
    let pekerjaan = PekerjaanService::update(&state.db, id, dto).await?;

    Ok(Json(PekerjaanMessageResponse {
        message: "Data pekerjaan berhasil diperbarui".to_string(),
        data: Some(pekerjaan),
    }))
}

/// Delete an employment record (admin only)
#[utoipa::path(
    delete,
    path = "/api/pekerjaan/{id}",
    params(("id" = Uuid, Path, description = "Pekerjaan ID")),
    responses(
        (status = 200, description = "Employment record deleted", body = PekerjaanMessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "Pekerjaan not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Pekerjaan"
)]
#[instrument(skip(state))]
pub async fn delete_pekerjaan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PekerjaanMessageResponse>, AppError> {
    PekerjaanService::delete(&state.db, id).await?;

    Ok(Json(PekerjaanMessageResponse {
        message: "Pekerjaan deleted successfully".to_string(),
        data: None,
    }))
}
