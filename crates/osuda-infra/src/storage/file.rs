//! Single-file JSON storage - the default durable backend.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use osuda_core::domain::Post;
use osuda_core::error::StorageError;
use osuda_core::ports::Storage;

/// Stores the whole collection as one pretty-printed JSON array.
///
/// Reads and writes are wholesale; there are no partial updates and no
/// write locking. A missing file is seeded with an empty collection on
/// first load.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn load_all(&self) -> Result<Vec<Post>, StorageError> {
        if !self.path.exists() {
            self.save_all(&[]).await?;
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let posts: Vec<Post> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Serialization(e.to_string()))?;

        tracing::debug!("Loaded {} posts from {}", posts.len(), self.path.display());
        Ok(posts)
    }

    async fn save_all(&self, posts: &[Post]) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(posts)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(&self.path, raw)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_posts() -> Vec<Post> {
        vec![
            Post {
                id: 1,
                content: "first".to_string(),
                keywords: "a, b".to_string(),
                created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
                manual_date: None,
            },
            Post {
                id: 2,
                content: "second".to_string(),
                keywords: String::new(),
                created_at: Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(),
                manual_date: Some(Utc.with_ymd_and_hms(2024, 2, 14, 0, 0, 0).unwrap()),
            },
        ]
    }

    #[tokio::test]
    async fn save_then_load_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("osuda.json"));

        let posts = sample_posts();
        storage.save_all(&posts).await.unwrap();
        let loaded = storage.load_all().await.unwrap();

        assert_eq!(loaded.len(), posts.len());
        for (loaded, original) in loaded.iter().zip(&posts) {
            assert_eq!(loaded.id, original.id);
            assert_eq!(loaded.content, original.content);
            assert_eq!(loaded.keywords, original.keywords);
            assert_eq!(loaded.created_at, original.created_at);
            assert_eq!(loaded.manual_date, original.manual_date);
        }
    }

    #[tokio::test]
    async fn missing_file_is_seeded_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("osuda.json"));

        assert!(storage.load_all().await.unwrap().is_empty());
        assert!(storage.path().exists());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("osuda.json");
        std::fs::write(&path, "not json at all").unwrap();

        let storage = JsonFileStorage::new(path);
        let err = storage.load_all().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("osuda.json"));

        storage.save_all(&sample_posts()).await.unwrap();
        storage.save_all(&[]).await.unwrap();

        assert!(storage.load_all().await.unwrap().is_empty());
    }
}
