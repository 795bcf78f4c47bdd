use crate::domain::ports::Storage;
use crate::utils::error::{LessenError, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Files under a base directory. Writes go through a temp file and a rename
/// so a reader never sees half a payload.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp_path = full_path.with_extension("tmp");
        tokio::fs::write(&tmp_path, data).await?;
        tokio::fs::rename(&tmp_path, &full_path).await?;
        Ok(())
    }

    async fn remove_file(&self, path: &str) -> Result<()> {
        let full_path = self.base_path.join(path);
        tokio::fs::remove_file(full_path).await?;
        Ok(())
    }
}

/// Process-local storage, used with `--no-cache` and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files
            .lock()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }

    fn poisoned() -> LessenError {
        LessenError::CacheError {
            message: "memory storage lock poisoned".to_string(),
        }
    }
}

impl Storage for MemoryStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let files = self.files.lock().map_err(|_| Self::poisoned())?;
        files.get(path).cloned().ok_or_else(|| LessenError::CacheError {
            message: format!("no entry named {}", path),
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut files = self.files.lock().map_err(|_| Self::poisoned())?;
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }

    async fn remove_file(&self, path: &str) -> Result<()> {
        let mut files = self.files.lock().map_err(|_| Self::poisoned())?;
        files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| LessenError::CacheError {
                message: format!("no entry named {}", path),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_storage_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("nested"));

        storage.write_file("slot.json", b"{}").await.unwrap();
        assert_eq!(storage.read_file("slot.json").await.unwrap(), b"{}");
        assert!(!temp_dir.path().join("nested/slot.tmp").exists());

        storage.remove_file("slot.json").await.unwrap();
        assert!(storage.read_file("slot.json").await.is_err());
    }

    #[tokio::test]
    async fn test_memory_storage_missing_entry() {
        let storage = MemoryStorage::new();
        assert!(storage.read_file("missing").await.is_err());
        assert!(storage.remove_file("missing").await.is_err());
    }
}
