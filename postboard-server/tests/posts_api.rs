//! End-to-end tests of the post routes through the full router

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use postboard_server::{build_router, AppState, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let cors = ServerConfig::default().cors_layer().unwrap();
    build_router(AppState::default(), cors)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn titles(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect()
}

fn ids(value: &Value) -> Vec<u64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn list_returns_seed_posts() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/posts", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "title": "First post", "content": "This is the first post."},
            {"id": 2, "title": "Second post", "content": "This is the second post."}
        ])
    );
}

#[tokio::test]
async fn sort_by_title_is_case_insensitive() {
    let app = app();
    for title in ["Banana", "apple"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/posts",
            Some(json!({"title": title, "content": "fruit"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, "/api/posts?sort=title", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["apple", "Banana", "First post", "Second post"]);

    let (_, body) = send(&app, Method::GET, "/api/posts?sort=title&direction=desc", None).await;
    assert_eq!(titles(&body), ["Second post", "First post", "Banana", "apple"]);

    // Unsorted listing still reflects insertion order
    let (_, body) = send(&app, Method::GET, "/api/posts", None).await;
    assert_eq!(ids(&body), [1, 2, 3, 4]);
}

#[tokio::test]
async fn invalid_sort_parameters_are_rejected() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/posts?sort=bogus", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid sort field. Use \"title\" or \"content\"."}));

    let (status, body) = send(&app, Method::GET, "/api/posts?direction=up", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid direction. Use \"asc\" or \"desc\"."}));

    let (_, body) = send(&app, Method::GET, "/api/posts", None).await;
    assert_eq!(ids(&body), [1, 2]);
}

#[tokio::test]
async fn create_assigns_next_id() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/posts",
        Some(json!({"title": "Third", "content": "Body"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 3, "title": "Third", "content": "Body"}));
}

#[tokio::test]
async fn create_reports_missing_fields() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/api/posts", Some(json!({"title": "T"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing fields", "fields": ["content"]}));

    let (status, body) = send(&app, Method::POST, "/api/posts", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"], json!(["title", "content"]));

    let (status, body) = send(&app, Method::POST, "/api/posts", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"], json!(["title", "content"]));

    // Failed creates do not consume ids
    let (_, body) = send(
        &app,
        Method::POST,
        "/api/posts",
        Some(json!({"title": "T", "content": "C"})),
    )
    .await;
    assert_eq!(body["id"], 3);
}

#[tokio::test]
async fn update_is_partial() {
    let app = app();
    let (status, body) = send(&app, Method::PUT, "/api/posts/1", Some(json!({"content": "X"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Post 1 updated successfully",
            "post": {"id": 1, "title": "First post", "content": "X"}
        })
    );
}

#[tokio::test]
async fn update_with_no_fields_is_a_no_op() {
    let app = app();
    let (status, body) = send(&app, Method::PUT, "/api/posts/2", Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["post"]["title"], "Second post");
    assert_eq!(body["post"]["content"], "This is the second post.");
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let app = app();

    let (status, body) = send(&app, Method::PUT, "/api/posts/99", Some(json!({"title": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Post not found"}));

    let (status, _) = send(&app, Method::PUT, "/api/posts/abc", Some(json!({"title": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_lookup() {
    let app = app();

    let (status, body) = send(&app, Method::DELETE, "/api/posts/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Post with id 2 has been deleted successfully."})
    );

    let (_, body) = send(&app, Method::GET, "/api/posts", None).await;
    assert_eq!(ids(&body), [1]);

    let (status, _) = send(&app, Method::DELETE, "/api/posts/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::PUT, "/api/posts/2", Some(json!({"title": "back"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/posts",
        Some(json!({"title": "New", "content": "post"})),
    )
    .await;
    assert_eq!(body["id"], 3);
}

#[tokio::test]
async fn search_semantics() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/posts/search?title=first", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["First post"]);

    let (_, body) = send(&app, Method::GET, "/api/posts/search", None).await;
    assert_eq!(ids(&body), [1, 2]);

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/posts/search?title=POST&content=second",
        None,
    )
    .await;
    assert_eq!(ids(&body), [2]);

    let (status, body) = send(&app, Method::GET, "/api/posts/search?content=zebra", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, body) = send(&app, Method::GET, "/api/posts/search?title=&content=", None).await;
    assert_eq!(ids(&body), [1, 2]);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/posts")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn repeated_search_key_uses_first_value() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/posts/search?title=first&title=second", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["First post"]);
}

#[tokio::test]
async fn repeated_sort_key_uses_first_value() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/posts?sort=title&sort=bogus&direction=desc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["Second post", "First post"]);

    // First value decides validation too, and errors stay JSON
    let (status, body) = send(&app, Method::GET, "/api/posts?sort=bogus&sort=title", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid sort field. Use \"title\" or \"content\"."}));
}
