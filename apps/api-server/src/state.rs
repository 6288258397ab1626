//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_core::service::PostService;
use blog_infra::database::{DbConn, PostgresPostRepository};

/// Shared application state. The pooled connection behind the repository is
/// the only resource shared between request tasks.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
}

impl AppState {
    /// Wire the service stack on top of an established connection.
    pub fn new(db: DbConn) -> Self {
        let repo: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(db));
        Self {
            posts: Arc::new(PostService::new(repo)),
        }
    }

    /// Build state directly from a repository; used by tests to swap in an
    /// in-memory double.
    #[cfg(test)]
    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: Arc::new(PostService::new(repo)),
        }
    }
}
