//! Alumni data models and DTOs.
//!
//! Wire field names keep the original API contract (`nama`, `jurusan`,
//! `angkatan`, ...).

use alumnet_core::pagination::PaginationMeta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Alumni {
    pub id: Uuid,
    pub nim: Option<String>,
    pub nama: String,
    pub jurusan: Option<String>,
    pub angkatan: Option<i32>,
    pub tahun_lulus: Option<i32>,
    pub email: Option<String>,
    pub no_telp: Option<String>,
    pub alamat: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAlumniDto {
    pub nim: Option<String>,
    #[validate(length(min = 1, message = "nama is required"))]
    pub nama: String,
    pub jurusan: Option<String>,
    pub angkatan: Option<i32>,
    pub tahun_lulus: Option<i32>,
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
    pub no_telp: Option<String>,
    pub alamat: Option<String>,
}

/// Partial update; only provided fields change.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateAlumniDto {
    pub nim: Option<String>,
    #[validate(length(min = 1, message = "nama must not be empty"))]
    pub nama: Option<String>,
    pub jurusan: Option<String>,
    pub angkatan: Option<i32>,
    pub tahun_lulus: Option<i32>,
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
    pub no_telp: Option<String>,
    pub alamat: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedAlumniResponse {
    pub data: Vec<Alumni>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlumniMessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Alumni>,
}
