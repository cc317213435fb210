//! Employment record ("pekerjaan") models and DTOs.

use alumnet_core::pagination::PaginationMeta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pekerjaan {
    pub id: Uuid,
    /// Owning identity; populated from the creating caller.
    pub alumni_id: Uuid,
    pub nama_perusahaan: String,
    pub posisi_jabatan: String,
    pub bidang_industri: Option<String>,
    pub lokasi_kerja: Option<String>,
    pub gaji_range: Option<String>,
    pub tanggal_kerja: Option<i64>,
    pub tanggal_selesai: Option<i64>,
    pub status: Option<String>,
    pub deskripsi: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePekerjaanDto {
    #[validate(length(min = 1, message = "nama_perusahaan is required"))]
    pub nama_perusahaan: String,
    #[validate(length(min = 1, message = "posisi_jabatan is required"))]
    pub posisi_jabatan: String,
    #[validate(length(min = 1, message = "bidang_industri is required"))]
    pub bidang_industri: String,
    #[validate(length(min = 1, message = "lokasi_kerja is required"))]
    pub lokasi_kerja: String,
    pub gaji_range: Option<String>,
    pub tanggal_kerja: i64,
    pub tanggal_selesai: Option<i64>,
    pub status: Option<String>,
    pub deskripsi: Option<String>,
}

/// Partial update of the mutable fields.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePekerjaanDto {
    #[validate(length(min = 1, message = "nama_perusahaan must not be empty"))]
    pub nama_perusahaan: Option<String>,
    #[validate(length(min = 1, message = "posisi_jabatan must not be empty"))]
    pub posisi_jabatan: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedPekerjaanResponse {
    pub data: Vec<Pekerjaan>,
    pub meta: PaginationMeta,
}

/// Envelope for the "my records" listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct PekerjaanListResponse {
    pub message: String,
    pub data: Vec<Pekerjaan>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PekerjaanMessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Pekerjaan>,
}
