use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{User, UserRole};
use crate::utils::db::with_timeout;
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    /// Fresh read of a user record by id; used by the token
    /// verification stage on every protected request.
    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, AppError> {
        with_timeout(
            sqlx::query_as::<_, User>(
                "SELECT id, username, email, password, role, created_at FROM users WHERE id = $1",
            )
            .bind(id)
            .fetch_optional(db),
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn find_by_username(db: &PgPool, username: &str) -> Result<Option<User>, AppError> {
        with_timeout(
            sqlx::query_as::<_, User>(
                "SELECT id, username, email, password, role, created_at FROM users WHERE username = $1",
            )
            .bind(username)
            .fetch_optional(db),
        )
        .await
    }

    #[instrument(skip(db, password))]
    pub async fn create(
        db: &PgPool,
        username: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        with_timeout(
            sqlx::query_as::<_, User>(
                "INSERT INTO users (username, email, password, role)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id, username, email, password, role, created_at",
            )
            .bind(username)
            .bind(email)
            .bind(password)
            .bind(role)
            .fetch_one(db),
        )
        .await
    }
}
