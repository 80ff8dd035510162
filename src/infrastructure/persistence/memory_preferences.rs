use crate::domain::errors::DomainResult;
use crate::domain::ports::preference_store::PreferenceStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Process-local preference store
#[derive(Default)]
pub struct InMemoryPreferenceStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| crate::domain::errors::DomainError::Internal(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| crate::domain::errors::DomainError::Internal(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
