use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::role::require_admin;
use crate::state::AppState;

use super::controller::{
    create_alumni, delete_alumni, get_all_alumni, get_alumni_by_id, update_alumni,
};

/// Reads are open to any authenticated user; writes are admin only.
pub fn init_alumni_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_alumni))
        .route("/{id}", get(get_alumni_by_id))
        .merge(
            Router::new()
                .route("/", post(create_alumni))
                .route("/{id}", axum::routing::put(update_alumni).delete(delete_alumni))
                .route_layer(middleware::from_fn(require_admin)),
        )
}
