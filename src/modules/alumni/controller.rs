use alumnet_core::pagination::PaginationParams;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    Alumni, AlumniMessageResponse, CreateAlumniDto, PaginatedAlumniResponse, UpdateAlumniDto,
};
use super::service::AlumniService;

/// List alumni
#[utoipa::path(
    get,
    path = "/api/alumni",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated list of alumni", body = PaginatedAlumniResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Alumni"
)]
#[instrument(skip(state))]
pub async fn get_all_alumni(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedAlumniResponse>, AppError> {
    let (alumni, total) = AlumniService::get_all(&state.db, &params).await?;

    Ok(Json(PaginatedAlumniResponse {
        data: alumni,
        meta: params.meta(total),
    }))
}

/// Get alumni by id
#[utoipa::path(
    get,
    path = "/api/alumni/{id}",
    params(("id" = Uuid, Path, description = "Alumni ID")),
    responses(
        (status = 200, description = "Alumni details", body = Alumni),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Alumni not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Alumni"
)]
#[instrument(skip(state))]
pub async fn get_alumni_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Alumni>, AppError> {
    let alumni = AlumniService::find_by_id(&state.db, id).await?;
    Ok(Json(alumni))
}

/// Create a new alumni record (admin only)
#[utoipa::path(
    post,
    path = "/api/alumni",
    request_body = CreateAlumniDto,
    responses(
        (status = 201, description = "Alumni created", body = AlumniMessageResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Alumni"
)]
#[instrument(skip(state, dto))]
pub async fn create_alumni(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAlumniDto>,
) -> Result<(StatusCode, Json<AlumniMessageResponse>), AppError> {
    let alumni = AlumniService::create(&state.db, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(AlumniMessageResponse {
            message: "Data alumni berhasil ditambahkan".to_string(),
            data: Some(alumni),
        }),
    ))
}

/// Update an alumni record (admin only)
#[utoipa::path(
    put,
    path = "/api/alumni/{id}",
    params(("id" = Uuid, Path, description = "Alumni ID")),
    request_body = UpdateAlumniDto,
    responses(
        (status = 200, description = "Alumni updated", body = AlumniMessageResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "Alumni not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Alumni"
)]
#[instrument(skip(state, dto))]
pub async fn update_alumni(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateAlumniDto>,
) -> Result<Json<AlumniMessageResponse>, AppError> {
    let alumni = AlumniService::update(&state.db, id, dto).await?;

    Ok(Json(AlumniMessageResponse {
        message: "Data alumni berhasil diperbarui".to_string(),
        data: Some(alumni),
    }))
}

/// Delete an alumni record (admin only)
#[utoipa::path(
    delete,
    path = "/api/alumni/{id}",
    params(("id" = Uuid, Path, description = "Alumni ID")),
    responses(
        (status = 200, description = "Alumni deleted", body = AlumniMessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "Alumni not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Alumni"
)]
#[instrument(skip(state))]
pub async fn delete_alumni(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AlumniMessageResponse>, AppError> {
    AlumniService::delete(&state.db, id).await?;

    Ok(Json(AlumniMessageResponse {
        message: "Alumni deleted successfully".to_string(),
        data: None,
    }))
}
