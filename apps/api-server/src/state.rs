//! Application state - shared across all handlers.

use std::sync::Arc;

use osuda_core::ports::Storage;
use osuda_core::repository::PostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<PostRepository>,
}

impl AppState {
    /// Load the stored collection into memory. An unreadable store is
    /// logged and the journal starts empty rather than refusing to boot.
    pub async fn new(storage: Arc<dyn Storage>) -> Self {
        let repo = match PostRepository::load(storage.clone()).await {
            Ok(repo) => repo,
            Err(e) => {
                tracing::error!(
                    "Failed to load stored posts: {}. Starting with an empty journal.",
                    e
                );
                PostRepository::empty(storage)
            }
        };

        tracing::info!("Application state initialized");

        Self {
            repo: Arc::new(repo),
        }
    }
}
