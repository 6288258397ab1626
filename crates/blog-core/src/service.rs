//! Post service - input invariants and request-shape defaults, enforced
//! before anything reaches storage.

use std::sync::Arc;

use crate::domain::{Post, PostDraft, ValidPost};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Effective page size when the caller supplies none or an out-of-range one.
const DEFAULT_LIMIT: i64 = 20;
/// Largest page size a caller may request.
const MAX_LIMIT: i64 = 100;

/// Business logic and validation for posts. Thin by design: everything that
/// touches SQL lives behind the [`PostRepository`] port.
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Check basic invariants and materialize the JSON fields.
    ///
    /// Title and content must be non-empty after trimming; absent or null
    /// `tags`/`metadata` become empty collections so nothing downstream ever
    /// sees null there.
    fn validate(draft: PostDraft) -> Result<ValidPost, DomainError> {
        if draft.title.trim().is_empty() {
            return Err(DomainError::Validation("title is required".to_string()));
        }
        if draft.content.trim().is_empty() {
            return Err(DomainError::Validation("content is required".to_string()));
        }
        Ok(ValidPost {
            title: draft.title,
            content: draft.content,
            tags: draft.tags.unwrap_or_default(),
            metadata: draft.metadata.unwrap_or_default(),
        })
    }

    /// Validate and insert. Validation failure short-circuits before any
    /// storage call.
    pub async fn create(&self, draft: PostDraft) -> Result<i64, DomainError> {
        let post = Self::validate(draft)?;
        Ok(self.repo.create(&post).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Post>, DomainError> {
        Ok(self.repo.get(id).await?)
    }

    /// List with clamped pagination: `limit` outside (0, 100] falls back to
    /// the default of 20, a negative `offset` becomes 0.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Post>, DomainError> {
        let limit = if limit <= 0 || limit > MAX_LIMIT {
            DEFAULT_LIMIT
        } else {
            limit
        };
        let offset = offset.max(0);
        Ok(self.repo.list(offset as u64, limit as u64).await?)
    }

    /// Validate and replace. `false` means no post with that id exists.
    pub async fn update(&self, id: i64, draft: PostDraft) -> Result<bool, DomainError> {
        let post = Self::validate(draft)?;
        Ok(self.repo.update(id, &post).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.repo.delete(id).await?)
    }
}
