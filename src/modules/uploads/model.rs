//! Upload models and the category policy table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Upload categories and their validation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadCategory {
    Photo,
    Certificate,
}

impl UploadCategory {
    /// Allowed file extensions, matched exactly (case-sensitive,
    /// including the leading dot).
    pub const fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            UploadCategory::Photo => &[".jpg", ".jpeg", ".png"],
            UploadCategory::Certificate => &[".pdf"],
        }
    }

    /// Maximum payload size in bytes.
    pub const fn max_bytes(&self) -> usize {
        match self {
            UploadCategory::Photo => 1024 * 1024,
            UploadCategory::Certificate => 2 * 1024 * 1024,
        }
    }

    /// Subdirectory under the upload base directory.
    pub const fn directory(&self) -> &'static str {
        match self {
            UploadCategory::Photo => "photos",
            UploadCategory::Certificate => "certificates",
        }
    }

    /// Logical type stored on the metadata record.
    pub const fn record_type(&self) -> &'static str {
        match self {
            UploadCategory::Photo => "image",
            UploadCategory::Certificate => "certificate",
        }
    }

    pub const fn extension_error(&self) -> &'static str {
        match self {
            UploadCategory::Photo => "only jpg, jpeg, png allowed",
            UploadCategory::Certificate => "only pdf allowed",
        }
    }

    pub const fn size_error(&self) -> &'static str {
        match self {
            UploadCategory::Photo => "file too large (max 1MB)",
            UploadCategory::Certificate => "file too large (max 2MB)",
        }
    }
}

/// Metadata record of a stored upload.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Upload {
    pub id: Uuid,
    /// Effective owner: the caller, or an admin-supplied override.
    pub user_id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub file_path: String,
    pub file_name: String,
    pub content_type: String,
    pub uploaded_at: DateTime<Utc>,
}

/// A file part received from a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct UploadParams {
    /// Owner override; honored only for admin callers.
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    pub data: Upload,
}
