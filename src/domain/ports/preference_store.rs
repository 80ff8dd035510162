use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// String key-value store holding UI preferences across process restarts
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Raw stored value, `None` when the key was never written
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}
