//! The post repository - owns the in-memory collection.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{Post, PostDraft};
use crate::error::{DomainError, StorageError};
use crate::ports::Storage;

/// In-memory post collection with write-through persistence.
///
/// The full collection lives in memory for the lifetime of the process and
/// is written back to [`Storage`] wholesale after every mutation. A failed
/// write is logged and swallowed; memory stays authoritative until the next
/// successful write.
pub struct PostRepository {
    posts: RwLock<Vec<Post>>,
    storage: Arc<dyn Storage>,
}

impl PostRepository {
    /// A repository over an empty collection.
    pub fn empty(storage: Arc<dyn Storage>) -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
            storage,
        }
    }

    /// Read the full stored collection into memory.
    pub async fn load(storage: Arc<dyn Storage>) -> Result<Self, StorageError> {
        let posts = storage.load_all().await?;
        Ok(Self {
            posts: RwLock::new(posts),
            storage,
        })
    }

    /// Create a post from `draft` and persist the collection.
    ///
    /// The new id is one above the current maximum (1 for an empty
    /// collection), `created_at` is the current UTC time.
    pub async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        validate(&draft)?;

        let mut posts = self.posts.write().await;
        let id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let post = Post {
            id,
            content: draft.content,
            keywords: draft.keywords,
            created_at: Utc::now(),
            manual_date: draft.manual_date,
        };

        posts.push(post.clone());
        self.persist(&posts).await;

        Ok(post)
    }

    /// Fetch a single post by id.
    pub async fn get(&self, id: u64) -> Result<Post, DomainError> {
        let posts = self.posts.read().await;
        posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(DomainError::NotFound(id))
    }

    /// Replace a post's mutable fields and persist the collection.
    ///
    /// `id` and `created_at` are untouched. A draft without a manual date
    /// clears any stored one; updates replace, they do not merge.
    pub async fn update(&self, id: u64, draft: PostDraft) -> Result<(), DomainError> {
        validate(&draft)?;

        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::NotFound(id))?;

        post.content = draft.content;
        post.keywords = draft.keywords;
        post.manual_date = draft.manual_date;

        self.persist(&posts).await;
        Ok(())
    }

    /// Remove a post permanently and persist the collection.
    pub async fn delete(&self, id: u64) -> Result<(), DomainError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(DomainError::NotFound(id))?;

        posts.remove(index);
        self.persist(&posts).await;
        Ok(())
    }

    /// Snapshot of the collection in append order.
    pub async fn list(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    /// Write the collection out, surfacing the result. Used at shutdown;
    /// the per-mutation path goes through `persist` instead.
    pub async fn flush(&self) -> Result<(), StorageError> {
        let posts = self.posts.read().await;
        self.storage.save_all(&posts).await
    }

    /// Write-through after a mutation. Failures are logged, never
    /// propagated, and nothing is rolled back.
    async fn persist(&self, posts: &[Post]) {
        if let Err(e) = self.storage.save_all(posts).await {
            tracing::error!("Failed to persist posts: {}", e);
        }
    }
}

fn validate(draft: &PostDraft) -> Result<(), DomainError> {
    if draft.content.is_empty() {
        return Err(DomainError::Validation("Content is required.".to_string()));
    }
    Ok(())
}
