use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::modules::users::model::UserRole;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// The authenticated caller, resolved from a verified token.
///
/// Produced exclusively by [`require_auth`] and dropped when request
/// processing ends.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Token verification stage, applied to every route under `/api` and
/// `/uploads`.
///
/// Verifies the bearer token with the injected signing config, then
/// re-reads the subject from the user store (no caching); a token whose
/// user has since disappeared is rejected. On success the resolved
/// [`CurrentUser`] is attached to the request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            AppError::unauthorized(anyhow::anyhow!("Missing authorization header"))
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::unauthorized(anyhow::anyhow!("Invalid authorization header format"))
    })?;

    let claims = verify_token(token, &state.jwt_config)?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid user ID in token")))?;

    let user = UserService::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("User no longer exists")))?;

    req.extensions_mut().insert(CurrentUser {
        id: user.id,
        username: user.username,
        role: user.role,
    });

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Missing authentication")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(role: UserRole) -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            username: "test".to_string(),
            role,
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(test_user(UserRole::Admin).is_admin());
        assert!(!test_user(UserRole::User).is_admin());
    }

    #[tokio::test]
    async fn test_extractor_reads_attached_identity() {
        let user = test_user(UserRole::User);
        let mut req = axum::http::Request::builder().body(()).unwrap();
        req.extensions_mut().insert(user.clone());
        let (mut parts, _) = req.into_parts();

        let extracted = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted.id, user.id);
    }

    #[tokio::test]
    async fn test_extractor_rejects_when_stage_never_ran() {
        let req = axum::http::Request::builder().body(()).unwrap();
        let (mut parts, _) = req.into_parts();

        let result = CurrentUser::from_request_parts(&mut parts, &()).await;
        assert_eq!(
            result.unwrap_err().status,
            axum::http::StatusCode::UNAUTHORIZED
        );
    }
}
