use async_trait::async_trait;
use std::time::Duration;

/// Suspends the caller for simulated network latency
#[async_trait]
pub trait TimeService: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
