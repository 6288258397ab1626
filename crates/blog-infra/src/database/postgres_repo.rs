//! PostgreSQL implementation of the posts repository.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::Json;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use blog_core::domain::{Post, ValidPost};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// Upper bound on any single storage operation. Expiry fails the operation;
/// no layer retries.
const OP_TIMEOUT: Duration = Duration::from_secs(5);

pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Run a database future under the per-operation timeout.
async fn bounded<T, F>(fut: F) -> Result<T, RepoError>
where
    F: Future<Output = Result<T, sea_orm::DbErr>>,
{
    match tokio::time::timeout(OP_TIMEOUT, fut).await {
        Ok(result) => result.map_err(|e| RepoError::Query(e.to_string())),
        Err(_) => Err(RepoError::Timeout),
    }
}

/// Marshal the JSON-typed fields for storage.
fn encode_json_fields(post: &ValidPost) -> Result<(Json, Json), RepoError> {
    let tags =
        serde_json::to_value(&post.tags).map_err(|e| RepoError::Serialize(e.to_string()))?;
    let metadata =
        serde_json::to_value(&post.metadata).map_err(|e| RepoError::Serialize(e.to_string()))?;
    Ok((tags, metadata))
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: &ValidPost) -> Result<i64, RepoError> {
        let (tags, metadata) = encode_json_fields(post)?;
        let now = Utc::now();

        let row = post::ActiveModel {
            title: Set(post.title.clone()),
            content: Set(post.content.clone()),
            tags: Set(tags),
            metadata: Set(metadata),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        let result = bounded(PostEntity::insert(row).exec(&self.db)).await?;
        Ok(result.last_insert_id)
    }

    async fn get(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let row = bounded(PostEntity::find_by_id(id).one(&self.db)).await?;
        Ok(row.map(Into::into))
    }

    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let rows = bounded(
            PostEntity::find()
                .order_by_desc(post::Column::Id)
                .offset(offset)
                .limit(limit)
                .all(&self.db),
        )
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, post: &ValidPost) -> Result<bool, RepoError> {
        let (tags, metadata) = encode_json_fields(post)?;
        let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();

        let result = bounded(
            PostEntity::update_many()
                .col_expr(post::Column::Title, Expr::value(post.title.clone()))
                .col_expr(post::Column::Content, Expr::value(post.content.clone()))
                .col_expr(post::Column::Tags, Expr::value(tags))
                .col_expr(post::Column::Metadata, Expr::value(metadata))
                .col_expr(post::Column::UpdatedAt, Expr::value(now))
                .filter(post::Column::Id.eq(id))
                .exec(&self.db),
        )
        .await?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        let result = bounded(PostEntity::delete_by_id(id).exec(&self.db)).await?;
        Ok(result.rows_affected > 0)
    }
}
