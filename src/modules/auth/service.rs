use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::UserPublic;
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;

use super::model::{LoginRequest, LoginResponse, LoginUser, RegisterRequest};

pub struct AuthService;

impl AuthService {
    /// Creates a credential record. Input emptiness is checked at the
    /// boundary; persistence failures (including duplicate usernames)
    /// surface as storage errors.
    #[instrument(skip(db, dto))]
    pub async fn register(db: &PgPool, dto: RegisterRequest) -> Result<UserPublic, AppError> {
        let role = dto.role.unwrap_or_default();

        let user =
            UserService::create(db, &dto.username, &dto.email, &dto.password, role).await?;

        Ok(user.into())
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown username and wrong password produce the identical
    /// rejection so the response carries no user-enumeration signal.
    /// The stored password is compared for exact equality (see
    /// DESIGN.md on the absence of hashing).
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let user = UserService::find_by_username(db, &dto.username)
            .await?
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid credentials")))?;

        if user.password != dto.password {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid credentials"
            )));
        }

        let token = create_access_token(user.id, &user.role, jwt_config)?;

        Ok(LoginResponse {
            token,
            user: LoginUser {
                id: user.id,
                username: user.username,
                role: user.role,
            },
        })
    }
}
