use async_trait::async_trait;

use crate::domain::{Post, ValidPost};
use crate::error::RepoError;

/// Post repository - CRUD against the posts table.
///
/// Absence is data, not failure: `get` returns `None` and `update`/`delete`
/// return `false` when no row matches the id.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post and return its generated id.
    async fn create(&self, post: &ValidPost) -> Result<i64, RepoError>;

    /// Fetch a single post by id.
    async fn get(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Fetch posts ordered by id descending. Always a vec, never null,
    /// even when nothing matches.
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// Full replace of title/content/tags/metadata, refreshing the update
    /// timestamp. `false` means no such row.
    async fn update(&self, id: i64, post: &ValidPost) -> Result<bool, RepoError>;

    /// Hard delete. `false` means no such row.
    async fn delete(&self, id: i64) -> Result<bool, RepoError>;
}
