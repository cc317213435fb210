//! Role check stage.
//!
//! Reads the [`CurrentUser`] already attached by the token verification
//! stage; it never parses the token itself, so it must be layered
//! inside (after) [`super::auth::require_auth`]. The policy is a single
//! exact match, there is no role hierarchy.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::middleware::auth::CurrentUser;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

/// Middleware for routes restricted to administrators.
///
/// # Usage
///
/// ```rust,ignore
/// Router::new()
///     .route("/", post(create_alumni))
///     .route_layer(middleware::from_fn(require_admin));
/// ```
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    require_role(req, next, UserRole::Admin).await
}

/// Middleware that admits only callers whose role equals
/// `required_role`.
pub async fn require_role(
    req: Request,
    next: Next,
    required_role: UserRole,
) -> Result<Response, AppError> {
    let current_user = req.extensions().get::<CurrentUser>().ok_or_else(|| {
        AppError::unauthorized(anyhow::anyhow!("Missing authentication"))
    })?;

    check_role(current_user, required_role)?;

    Ok(next.run(req).await)
}

/// Exact-match role check backing [`require_role`].
pub fn check_role(current_user: &CurrentUser, required_role: UserRole) -> Result<(), AppError> {
    if current_user.role != required_role {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required role: {}, but user has role: {}",
            required_role,
            current_user.role
        )));
    }

    Ok(())
}
