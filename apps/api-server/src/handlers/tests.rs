use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::{App, test, web};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Value, json};

use blog_core::domain::{Post, ValidPost};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use crate::handlers;
use crate::state::AppState;

/// In-memory repository backing the handler tests.
#[derive(Default)]
struct MemoryPostRepository {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    posts: HashMap<i64, Post>,
    next_id: i64,
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn create(&self, post: &ValidPost) -> Result<i64, RepoError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        let now = Utc::now();
        inner.posts.insert(
            id,
            Post {
                id,
                title: post.title.clone(),
                content: post.content.clone(),
                tags: post.tags.clone(),
                metadata: post.metadata.clone(),
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.inner.lock().unwrap().posts.get(&id).cloned())
    }

    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let inner = self.inner.lock().unwrap();
        let mut posts: Vec<Post> = inner.posts.values().cloned().collect();
        posts.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(posts
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn update(&self, id: i64, post: &ValidPost) -> Result<bool, RepoError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.posts.get_mut(&id) {
            Some(existing) => {
                existing.title = post.title.clone();
                existing.content = post.content.clone();
                existing.tags = post.tags.clone();
                existing.metadata = post.metadata.clone();
                existing.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        Ok(self.inner.lock().unwrap().posts.remove(&id).is_some())
    }
}

fn test_state() -> AppState {
    AppState::with_repository(Arc::new(MemoryPostRepository::default()))
}

/// Build the app under test. A macro because `init_service`'s return type
/// is unnameable.
macro_rules! spawn_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .app_data(handlers::json_config())
                .configure(handlers::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn health_returns_fixed_body() {
    let app = spawn_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": "ok"}));
}

#[actix_web::test]
async fn full_post_lifecycle() {
    let app = spawn_app!();

    // Create
    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({"title": "A", "content": "B"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"id": 1}));

    // Read it back: JSON fields materialized, never null
    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/posts/1").to_request()).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "A");
    assert_eq!(body["tags"], json!([]));
    assert_eq!(body["metadata"], json!({}));

    // Full replace
    let req = test::TestRequest::put()
        .uri("/posts/1")
        .set_json(json!({"title": "A2", "content": "B2", "tags": ["x"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"updated": true}));

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/posts/1").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "A2");
    assert_eq!(body["tags"], json!(["x"]));

    // Delete, then the post is gone
    let resp =
        test::call_service(&app, test::TestRequest::delete().uri("/posts/1").to_request()).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"deleted": true}));

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/posts/1").to_request()).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "not found"}));
}

#[actix_web::test]
async fn non_numeric_id_is_rejected_before_the_service() {
    let app = spawn_app!();

    for uri in ["/posts/abc", "/posts/0", "/posts/-3"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), 400, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "invalid id"}));
    }
}

#[actix_web::test]
async fn blank_title_yields_400() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({"title": "   ", "content": "B"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "title is required"}));
}

#[actix_web::test]
async fn missing_body_fields_fail_validation_not_decoding() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({"title": "A"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "content is required"}));
}

#[actix_web::test]
async fn malformed_json_yields_400() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/posts")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn list_on_empty_store_is_an_empty_array() {
    let app = spawn_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn update_of_missing_post_is_404() {
    let app = spawn_app!();

    let req = test::TestRequest::put()
        .uri("/posts/9")
        .set_json(json!({"title": "A", "content": "B"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn unrouted_method_on_known_path_is_405() {
    let app = spawn_app!();

    let resp =
        test::call_service(&app, test::TestRequest::patch().uri("/posts").to_request()).await;
    assert_eq!(resp.status(), 405);

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/health").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 405);
}
