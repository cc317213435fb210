use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::middleware::role::require_admin;
use crate::state::AppState;

use super::controller::{
    create_pekerjaan, delete_pekerjaan, get_all_pekerjaan, get_my_pekerjaan, get_pekerjaan_by_id,
    update_pekerjaan,
};

/// Reads are open to any authenticated user; writes are admin only.
pub fn init_pekerjaan_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_pekerjaan))
        .route("/me", get(get_my_pekerjaan))
        .route("/{id}", get(get_pekerjaan_by_id))
        .merge(
            Router::new()
                .route("/", post(create_pekerjaan))
                .route("/{id}", put(update_pekerjaan).delete(delete_pekerjaan))
                .route_layer(middleware::from_fn(require_admin)),
        )
}
