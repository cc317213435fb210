use alumnet_core::pagination::PaginationParams;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::db::with_timeout;
use crate::utils::errors::AppError;

use super::model::{Alumni, CreateAlumniDto, UpdateAlumniDto};

const ALUMNI_COLUMNS: &str =
    "id, nim, nama, jurusan, angkatan, tahun_lulus, email, no_telp, alamat, created_at, updated_at";

pub struct AlumniService;

impl AlumniService {
    #[instrument(skip(db))]
    pub async fn get_all(
        db: &PgPool,
        params: &PaginationParams,
    ) -> Result<(Vec<Alumni>, i64), AppError> {
        let alumni = with_timeout(
            sqlx::query_as::<_, Alumni>(&format!(
                "SELECT {ALUMNI_COLUMNS} FROM alumni ORDER BY created_at DESC LIMIT $1 OFFSET $2"
            ))
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(db),
        )
        .await?;

        let total = with_timeout(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM alumni").fetch_one(db),
        )
        .await?;

        Ok((alumni, total))
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Alumni, AppError> {
        with_timeout(
            sqlx::query_as::<_, Alumni>(&format!(
                "SELECT {ALUMNI_COLUMNS} FROM alumni WHERE id = $1"
            ))
            .bind(id)
            .fetch_optional(db),
        )
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Alumni not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateAlumniDto) -> Result<Alumni, AppError> {
        with_timeout(
            sqlx::query_as::<_, Alumni>(&format!(
                "INSERT INTO alumni (nim, nama, jurusan, angkatan, tahun_lulus, email, no_telp, alamat)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                 RETURNING {ALUMNI_COLUMNS}"
            ))
            .bind(&dto.nim)
            .bind(&dto.nama)
            .bind(&dto.jurusan)
            .bind(dto.angkatan)
            .bind(dto.tahun_lulus)
            .bind(&dto.email)
            .bind(&dto.no_telp)
            .bind(&dto.alamat)
            .fetch_one(db),
        )
        .await
    }

    /// Partial update: missing fields keep their stored values.
    #[instrument(skip(db, dto))]
    pub async fn update(db: &PgPool, id: Uuid, dto: UpdateAlumniDto) -> Result<Alumni, AppError> {
        let existing = Self::find_by_id(db, id).await?;

        with_timeout(
            sqlx::query_as::<_, Alumni>(&format!(
                "UPDATE alumni
                 SET nim = $1, nama = $2, jurusan = $3, angkatan = $4, tahun_lulus = $5,
                     email = $6, no_telp = $7, alamat = $8, updated_at = now()
                 WHERE id = $9
                 RETURNING {ALUMNI_COLUMNS}"
            ))
            .bind(dto.nim.or(existing.nim))
            .bind(dto.nama.unwrap_or(existing.nama))
            .bind(dto.jurusan.or(existing.jurusan))
            .bind(dto.angkatan.or(existing.angkatan))
            .bind(dto.tahun_lulus.or(existing.tahun_lulus))
            .bind(dto.email.or(existing.email))
            .bind(dto.no_telp.or(existing.no_telp))
            .bind(dto.alamat.or(existing.alamat))
            .bind(id)
            .fetch_one(db),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = with_timeout(
            sqlx::query("DELETE FROM alumni WHERE id = $1").bind(id).execute(db),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Alumni not found")));
        }

        Ok(())
    }
}
