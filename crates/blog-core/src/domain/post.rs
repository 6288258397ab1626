use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Post entity - a blog post with two JSON-typed side fields that live in
/// JSON columns of the relational store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub metadata: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Incoming write payload for create and update.
///
/// `tags` and `metadata` may be absent or null on the wire; the service
/// materializes them before anything touches storage. Missing `title` and
/// `content` decode to empty strings so that validation, not deserialization,
/// reports them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

/// A draft that passed validation: required fields are non-blank and the
/// JSON fields are concrete (possibly empty) collections, never null.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPost {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub metadata: Map<String, Value>,
}
