use std::path::Path;

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use alumnet_core::file_storage::{LocalFileStorage, StorageError};

use crate::middleware::auth::CurrentUser;
use crate::utils::db::with_timeout;
use crate::utils::errors::AppError;

use super::model::{Upload, UploadCategory, UploadedFile};

pub struct UploadService;

impl UploadService {
    /// Validates and stores one upload: payload bytes first, then the
    /// metadata record. The two writes are not atomic; if the metadata
    /// insert fails the already-written file stays behind.
    #[instrument(skip(db, storage, file), fields(filename = %file.filename, size = file.bytes.len()))]
    pub async fn store_upload(
        db: &PgPool,
        storage: &LocalFileStorage,
        category: UploadCategory,
        current_user: &CurrentUser,
        owner_override: Option<Uuid>,
        file: UploadedFile,
    ) -> Result<Upload, AppError> {
        let owner = resolve_owner(current_user, owner_override);

        validate_file(category, &file.filename, file.bytes.len())?;

        let key = storage_key(category, owner, &file.filename);
        let file_path = storage.save(&key, &file.bytes).await.map_err(|e| match e {
            StorageError::InvalidKey(_) => AppError::bad_request(e),
            StorageError::IoError(_) => AppError::database(e),
        })?;

        with_timeout(
            sqlx::query_as::<_, Upload>(
                "INSERT INTO uploads (user_id, type, file_path, file_name, content_type)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING id, user_id, type, file_path, file_name, content_type, uploaded_at",
            )
            .bind(owner)
            .bind(category.record_type())
            .bind(&file_path)
            .bind(&file.filename)
            .bind(&file.content_type)
            .fetch_one(db),
        )
        .await
    }
}

/// The override is honored only for admin callers; for everyone else it
/// is silently ignored.
fn resolve_owner(current_user: &CurrentUser, owner_override: Option<Uuid>) -> Uuid {
    match owner_override {
        Some(id) if current_user.is_admin() => id,
        _ => current_user.id,
    }
}

/// Extension and size policy. The extension check runs first, so a
/// disallowed type is rejected regardless of size.
fn validate_file(category: UploadCategory, filename: &str, size: usize) -> Result<(), AppError> {
    let extension = Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    if !category
        .allowed_extensions()
        .contains(&extension.as_str())
    {
        return Err(AppError::bad_request(anyhow::anyhow!(
            category.extension_error()
        )));
    }

    if size > category.max_bytes() {
        return Err(AppError::bad_request(anyhow::anyhow!(category.size_error())));
    }

    Ok(())
}

/// `<category-directory>/<owner>_<original-filename>`. Uploads with the
/// same owner and filename land on the same key, last writer wins.
fn storage_key(category: UploadCategory, owner: Uuid, filename: &str) -> String {
    format!("{}/{}_{}", category.directory(), owner, filename)
}
