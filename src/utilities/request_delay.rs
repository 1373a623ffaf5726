use tokio::time::{sleep, Duration};

/// Politeness pause between storefront requests.
pub async fn request_delay(delay_ms: u64) {
    if delay_ms == 0 {
        return;
    }

    tracing::trace!(delay_ms, "waiting before next request");
    sleep(Duration::from_millis(delay_ms)).await;
}
