//! In-memory storage - used for tests and storage-less runs.
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use osuda_core::domain::Post;
use osuda_core::error::StorageError;
use osuda_core::ports::Storage;

/// Volatile [`Storage`] keeping the collection behind an async RwLock.
#[derive(Default)]
pub struct InMemoryStorage {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn load_all(&self) -> Result<Vec<Post>, StorageError> {
        Ok(self.posts.read().await.clone())
    }

    async fn save_all(&self, posts: &[Post]) -> Result<(), StorageError> {
        *self.posts.write().await = posts.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn starts_empty() {
        let storage = InMemoryStorage::new();
        assert!(storage.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_replaces_the_collection() {
        let storage = InMemoryStorage::new();
        let post = Post {
            id: 1,
            content: "hello".to_string(),
            keywords: String::new(),
            created_at: Utc::now(),
            manual_date: None,
        };

        storage.save_all(std::slice::from_ref(&post)).await.unwrap();
        assert_eq!(storage.load_all().await.unwrap().len(), 1);

        storage.save_all(&[]).await.unwrap();
        assert!(storage.load_all().await.unwrap().is_empty());
    }
}
