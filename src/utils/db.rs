use std::future::Future;
use std::time::Duration;

use crate::utils::errors::AppError;

/// Upper bound on any single storage operation. Expiry abandons the
/// in-flight call (the future is dropped) and surfaces as a 500.
pub const STORAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs a storage operation under [`STORAGE_TIMEOUT`], mapping both the
/// operation's own error and timeout expiry to a storage failure.
pub async fn with_timeout<T, E, F>(fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<anyhow::Error>,
{
    match tokio::time::timeout(STORAGE_TIMEOUT, fut).await {
        Ok(result) => result.map_err(AppError::database),
        Err(_) => Err(AppError::database(anyhow::anyhow!(
            "storage operation timed out"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_ok_result_passes_through() {
        let result: Result<i32, AppError> =
            with_timeout(async { Ok::<_, anyhow::Error>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_inner_error_maps_to_storage_failure() {
        let result: Result<i32, AppError> =
            with_timeout(async { Err::<i32, _>(anyhow::anyhow!("down")) }).await;
        assert_eq!(result.unwrap_err().status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_maps_to_storage_failure() {
        let result: Result<i32, AppError> = with_timeout(async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<_, anyhow::Error>(1)
        })
        .await;
        assert_eq!(result.unwrap_err().status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
