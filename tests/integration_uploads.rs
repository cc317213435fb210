mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use alumnet::modules::users::model::UserRole;
use common::{
    create_test_user, generate_unique_username, multipart_file_body, test_app, test_state,
    token_for,
};

fn upload_request(uri: &str, token: &str, filename: &str, content_type: &str, content: &[u8]) -> Request<Body> {
    let (header, body) = multipart_file_body(filename, content_type, content);

    Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", header)
        .body(Body::from(body))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_upload_requires_authentication(pool: PgPool) {
    let app = test_app(test_state(pool.clone()));
    let (header, body) = multipart_file_body("photo.png", "image/png", b"fake");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/uploads/Unggah/photo")
                .header("content-type", header)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_photo_upload_success(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_username(), "pw", UserRole::User).await;
    let state = test_state(pool.clone());

    let content = vec![0u8; 500 * 1024];
    let response = test_app(state.clone())
        .oneshot(upload_request(
            "/uploads/Unggah/photo",
            &token_for(&user),
            "photo.png",
            "image/png",
            &content,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["message"], "photo uploaded successfully");
    assert_eq!(body["data"]["type"], "image");
    assert_eq!(body["data"]["user_id"], user.id.to_string());
    assert_eq!(body["data"]["file_name"], "photo.png");
    assert_eq!(body["data"]["content_type"], "image/png");

    // The payload landed at the recorded path.
    let file_path = body["data"]["file_path"].as_str().unwrap();
    let written = tokio::fs::read(file_path).await.unwrap();
    assert_eq!(written.len(), content.len());

    // Exactly one metadata record exists for the caller.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM uploads WHERE user_id = $1")
        .bind(user.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_disallowed_extension_rejected_regardless_of_size(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_username(), "pw", UserRole::User).await;

    let app = test_app(test_state(pool.clone()));
    let response = app
        .oneshot(upload_request(
            "/uploads/Unggah/photo",
            &token_for(&user),
            "doc.exe",
            "application/octet-stream",
            b"tiny",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "only jpg, jpeg, png allowed");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_oversize_certificate_rejected(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_username(), "pw", UserRole::User).await;

    let content = vec![0u8; 3 * 1024 * 1024];
    let app = test_app(test_state(pool.clone()));
    let response = app
        .oneshot(upload_request(
            "/uploads/Unggah/certificate",
            &token_for(&user),
            "cert.pdf",
            "application/pdf",
            &content,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "file too large (max 2MB)");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM uploads")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_certificate_upload_success(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_username(), "pw", UserRole::User).await;

    let app = test_app(test_state(pool.clone()));
    let response = app
        .oneshot(upload_request(
            "/uploads/Unggah/certificate",
            &token_for(&user),
            "cert.pdf",
            "application/pdf",
            &vec![0u8; 100 * 1024],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["data"]["type"], "certificate");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_owner_override(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_username(), "pw", UserRole::Admin).await;
    let target = create_test_user(&pool, &generate_unique_username(), "pw", UserRole::User).await;

    let app = test_app(test_state(pool.clone()));
    let response = app
        .oneshot(upload_request(
            &format!("/uploads/Unggah/photo?user_id={}", target.id),
            &token_for(&admin),
            "photo.jpg",
            "image/jpeg",
            b"fake-jpg",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    // The record is owned by the overridden identity, not the admin.
    assert_eq!(body["data"]["user_id"], target.id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_non_admin_override_is_ignored(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_username(), "pw", UserRole::User).await;
    let target = create_test_user(&pool, &generate_unique_username(), "pw", UserRole::User).await;

    let app = test_app(test_state(pool.clone()));
    let response = app
        .oneshot(upload_request(
            &format!("/uploads/Unggah/photo?user_id={}", target.id),
            &token_for(&user),
            "photo.jpg",
            "image/jpeg",
            b"fake-jpg",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["data"]["user_id"], user.id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_file_field_is_bad_request(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_username(), "pw", UserRole::User).await;

    let boundary = "alumnet-test-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{boundary}--\r\n"
    );

    let app = test_app(test_state(pool.clone()));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/uploads/Unggah/photo")
                .header("authorization", format!("Bearer {}", token_for(&user)))
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
