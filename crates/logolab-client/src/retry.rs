use std::future::Future;

use crate::error::ClientError;
use crate::types::RetryConfig;

/// Run `op` until it succeeds, fails terminally, or retries run out.
/// The last error is returned unchanged so callers can still classify it.
pub async fn retry_with_backoff<T, F, Fut>(policy: &RetryConfig, mut op: F) -> Result<T, ClientError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut retries = 0;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if !e.is_retryable() || retries >= policy.max_retries => return Err(e),
            Err(e) => {
                let delay = policy.delay_for(retries);
                retries += 1;
                tracing::debug!("{}, retrying in {:?} (retry {})", e, delay, retries);
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn waits_one_two_four_seconds_then_gives_up() {
        let calls = AtomicU32::new(0);
        let started = Instant::now();

        let result: Result<(), _> = retry_with_backoff(&RetryConfig::default(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ClientError::ServerError { status: 500, message: String::new() })
        })
        .await;

        assert!(matches!(result, Err(ClientError::ServerError { status: 500, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        let waited = started.elapsed().as_millis();
        assert!((7000..7010).contains(&waited), "waited {}ms", waited);
    }

    #[tokio::test(start_paused = true)]
    async fn forbidden_is_not_retried() {
        let calls = AtomicU32::new(0);
        let started = Instant::now();

        let result: Result<(), _> = retry_with_backoff(&RetryConfig::default(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ClientError::Forbidden)
        })
        .await;

        assert!(matches!(result, Err(ClientError::Forbidden)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(started.elapsed().as_millis() < 10);
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_after_transient_failures() {
        let calls = AtomicU32::new(0);

        let result = retry_with_backoff(&RetryConfig::default(), || async {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(ClientError::NotFound)
            } else {
                Ok("done")
            }
        })
        .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
