use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::preference_store::PreferenceStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;

/// Preferences kept as a flat JSON object of string values in a single file
pub struct FilePreferenceStore {
    path: PathBuf,
    // Serialises read-modify-write of the file
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    async fn read_all(&self) -> DomainResult<BTreeMap<String, String>> {
        if !fs::try_exists(&self.path).await? {
            return Ok(BTreeMap::new());
        }

        let raw = fs::read(&self.path).await?;
        if raw.is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_slice(&raw).map_err(|e| {
            DomainError::Storage(format!(
                "Failed to parse preferences file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_all().await?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::Storage(format!("Failed to create directory: {}", e))
            })?;
        }

        let encoded = serde_json::to_vec_pretty(&entries)?;
        fs::write(&self.path, encoded)
            .await
            .map_err(|e| DomainError::Storage(format!("Failed to write preferences: {}", e)))?;

        tracing::debug!("Preference {} written to {}", key, self.path.display());
        Ok(())
    }
}
