use std::path::PathBuf;

use axum::Router;
use sqlx::PgPool;
use uuid::Uuid;

use alumnet::config::cors::CorsConfig;
use alumnet::config::jwt::JwtConfig;
use alumnet::modules::users::model::UserRole;
use alumnet::router::init_router;
use alumnet::state::AppState;
use alumnet::utils::jwt::create_access_token;
use alumnet_core::file_storage::LocalFileStorage;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        token_expiry: 86400,
    }
}

/// Application state with a fixed signing secret and a per-run upload
/// directory under the system temp dir.
pub fn test_state(pool: PgPool) -> AppState {
    AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        storage: LocalFileStorage::new(test_upload_dir()),
    }
}

pub fn test_upload_dir() -> PathBuf {
    std::env::temp_dir().join(format!("alumnet-test-uploads-{}", Uuid::new_v4()))
}

pub fn test_app(state: AppState) -> Router {
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

/// Inserts a user row directly. Passwords are stored verbatim, exactly
/// as the registration endpoint does.
pub async fn create_test_user(
    pool: &PgPool,
    username: &str,
    password: &str,
    role: UserRole,
) -> TestUser {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (username, email, password, role)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(username)
    .bind(format!("{username}@test.com"))
    .bind(password)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        username: username.to_string(),
        password: password.to_string(),
        role,
    }
}

/// Mints a token for a test user with the shared test signing config.
pub fn token_for(user: &TestUser) -> String {
    create_access_token(user.id, &user.role, &test_jwt_config()).unwrap()
}

pub fn generate_unique_username() -> String {
    format!("user-{}", Uuid::new_v4())
}

#[allow(dead_code)]
pub async fn create_test_alumni(pool: &PgPool, nama: &str) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO alumni (nama, jurusan, email)
         VALUES ($1, 'Informatika', 'alumni@test.com')
         RETURNING id",
    )
    .bind(nama)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_pekerjaan(pool: &PgPool, alumni_id: Uuid, nama_perusahaan: &str) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO pekerjaan_alumni (alumni_id, nama_perusahaan, posisi_jabatan, bidang_industri, lokasi_kerja, tanggal_kerja)
         VALUES ($1, $2, 'Software Engineer', 'Teknologi', 'Jakarta', 2020)
         RETURNING id",
    )
    .bind(alumni_id)
    .bind(nama_perusahaan)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Builds a multipart body with a single `file` field.
///
/// Returns the `Content-Type` header value and the encoded body.
#[allow(dead_code)]
pub fn multipart_file_body(
    filename: &str,
    content_type: &str,
    content: &[u8],
) -> (String, Vec<u8>) {
    let boundary = "alumnet-test-boundary";

    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={boundary}"), body)
}
