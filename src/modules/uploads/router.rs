use axum::{Router, extract::DefaultBodyLimit, routing::post};

use crate::state::AppState;

use super::controller::{upload_certificate, upload_photo};

/// Multipart payload cap: the largest allowed file (2 MiB) plus
/// encoding overhead. Per-category size policy is enforced in the
/// service.
const MAX_UPLOAD_BODY_BYTES: usize = 4 * 1024 * 1024;

pub fn init_uploads_router() -> Router<AppState> {
    Router::new()
        .route("/Unggah/photo", post(upload_photo))
        .route("/Unggah/certificate", post(upload_certificate))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_BYTES))
}
