use alumnet_core::pagination::PaginationParams;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::db::with_timeout;
use crate::utils::errors::AppError;

use super::model::{CreatePekerjaanDto, Pekerjaan, UpdatePekerjaanDto};

const PEKERJAAN_COLUMNS: &str = "id, alumni_id, nama_perusahaan, posisi_jabatan, bidang_industri, \
     lokasi_kerja, gaji_range, tanggal_kerja, tanggal_selesai, status, deskripsi, \
     created_at, updated_at";

pub struct PekerjaanService;

impl PekerjaanService {
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        alumni_id: Uuid,
        dto: CreatePekerjaanDto,
    ) -> Result<Pekerjaan, AppError> {
        with_timeout(
            sqlx::query_as::<_, Pekerjaan>(&format!(
                "INSERT INTO pekerjaan_alumni
                     (alumni_id, nama_perusahaan, posisi_jabatan, bidang_industri, lokasi_kerja,
                      gaji_range, tanggal_kerja, tanggal_selesai, status, deskripsi)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                 RETURNING {PEKERJAAN_COLUMNS}"
            ))
            .bind(alumni_id)
            .bind(&dto.nama_perusahaan)
            .bind(&dto.posisi_jabatan)
            .bind(&dto.bidang_industri)
            .bind(&dto.lokasi_kerja)
            .bind(&dto.gaji_range)
            .bind(dto.tanggal_kerja)
            .bind(dto.tanggal_selesai)
            .bind(&dto.status)
            .bind(&dto.deskripsi)
            .fetch_one(db),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn get_all(
        db: &PgPool,
        params: &PaginationParams,
    ) -> Result<(Vec<Pekerjaan>, i64), AppError> {
        let pekerjaan = with_timeout(
            sqlx::query_as::<_, Pekerjaan>(&format!(
                "SELECT {PEKERJAAN_COLUMNS} FROM pekerjaan_alumni
                 ORDER BY created_at DESC LIMIT $1 OFFSET $2"
            ))
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(db),
        )
        .await?;

        let total = with_timeout(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pekerjaan_alumni").fetch_one(db),
        )
        .await?;

        Ok((pekerjaan, total))
    }

    /// Records owned by one alumni identity (the calling user).
    #[instrument(skip(db))]
    pub async fn find_by_alumni_id(
        db: &PgPool,
        alumni_id: Uuid,
    ) -> Result<Vec<Pekerjaan>, AppError> {
        with_timeout(
            sqlx::query_as::<_, Pekerjaan>(&format!(
                "SELECT {PEKERJAAN_COLUMNS} FROM pekerjaan_alumni
                 WHERE alumni_id = $1 ORDER BY created_at DESC"
            ))
            .bind(alumni_id)
            .fetch_all(db),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Pekerjaan, AppError> {
        with_timeout(
            sqlx::query_as::<_, Pekerjaan>(&format!(
                "SELECT {PEKERJAAN_COLUMNS} FROM pekerjaan_alumni WHERE id = $1"
            ))
            .bind(id)
            .fetch_optional(db),
        )
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Pekerjaan not found")))
    }

    /// Partial update: missing fields keep their stored values.
    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdatePekerjaanDto,
    ) -> Result<Pekerjaan, AppError> {
        let existing = Self::find_by_id(db, id).await?;

        with_timeout(
            sqlx::query_as::<_, Pekerjaan>(&format!(
                "UPDATE pekerjaan_alumni
                 SET nama_perusahaan = $1, posisi_jabatan = $2, updated_at = now()
                 WHERE id = $3
                 RETURNING {PEKERJAAN_COLUMNS}"
            ))
            .bind(dto.nama_perusahaan.unwrap_or(existing.nama_perusahaan))
            .bind(dto.posisi_jabatan.unwrap_or(existing.posisi_jabatan))
            .bind(id)
            .fetch_one(db),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = with_timeout(
            sqlx::query("DELETE FROM pekerjaan_alumni WHERE id = $1")
                .bind(id)
                .execute(db),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Pekerjaan not found")));
        }

        Ok(())
    }
}
