use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StorageError;

/// Storage trait - abstraction over durable persistence backends
/// (JSON file, blob store, in-memory).
///
/// Both operations move the whole collection at once; there are no partial
/// or incremental updates.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load every stored post. An empty store yields an empty collection.
    async fn load_all(&self) -> Result<Vec<Post>, StorageError>;

    /// Replace the stored collection with `posts`.
    async fn save_all(&self, posts: &[Post]) -> Result<(), StorageError>;
}
