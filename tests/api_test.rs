use axum::body::Body;
use axum::http::{Request, StatusCode};
use rusty_catalog::adapters::mock::BookCatalog as InMemoryBookCatalog;
use rusty_catalog::api::handlers::AppState;
use rusty_catalog::api::router::create_router;
use rusty_catalog::api::types::{BookResponse, ErrorResponse};
use rusty_catalog::application::catalog::CatalogDependencies;
use rusty_catalog::domain::NewBook;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// ヘルパー関数
// ============================================================================

fn setup_app() -> (Arc<InMemoryBookCatalog>, axum::Router) {
    let catalog = Arc::new(InMemoryBookCatalog::new());
    let catalog_deps = CatalogDependencies {
        book_catalog: catalog.clone(),
    };
    let app = create_router(Arc::new(AppState { catalog_deps }));
    (catalog, app)
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

// ============================================================================
// 正常系
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (_, app) = setup_app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_create_then_list() {
    let (_, app) = setup_app();

    let (status, body) = send(
        &app,
        with_json(
            "POST",
            "/books",
            json!({ "title": "Dune", "author": "Frank Herbert", "available": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: BookResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(created.title, "Dune");

    let (status, body) = send(&app, get("/books")).await;
    assert_eq!(status, StatusCode::OK);
    let books: Vec<BookResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(books, vec![created]);
}

#[tokio::test]
async fn test_create_defaults_available_to_false() {
    let (_, app) = setup_app();

    let (status, body) = send(
        &app,
        with_json("POST", "/books", json!({ "title": "Emma", "author": "Jane Austen" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: BookResponse = serde_json::from_slice(&body).unwrap();
    assert!(!created.available);
}

#[tokio::test]
async fn test_list_sorted_by_title() {
    let (catalog, app) = setup_app();
    for title in ["banana", "Apple", "cherry"] {
        catalog.seed(NewBook::new(title, "Anon", true));
    }

    let (status, body) = send(&app, get("/books?sort=title")).await;
    assert_eq!(status, StatusCode::OK);
    let books: Vec<BookResponse> = serde_json::from_slice(&body).unwrap();
    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
}

#[tokio::test]
async fn test_search_by_title() {
    let (catalog, app) = setup_app();
    catalog.seed(NewBook::new("Dune", "Frank Herbert", true));
    catalog.seed(NewBook::new("DUNE Messiah", "Frank Herbert", true));
    catalog.seed(NewBook::new("Emma", "Jane Austen", true));

    let (status, body) = send(&app, get("/books/search?title=dune")).await;
    assert_eq!(status, StatusCode::OK);
    let books: Vec<BookResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(books.len(), 2);

    let (status, body) = send(&app, get("/books/search?title=zzz")).await;
    assert_eq!(status, StatusCode::OK);
    let books: Vec<BookResponse> = serde_json::from_slice(&body).unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_update_and_delete() {
    let (catalog, app) = setup_app();
    let book = catalog.seed(NewBook::new("Dune", "Frank Herbert", true));
    let uri = format!("/books/{}", book.id);

    let (status, body) = send(
        &app,
        with_json(
            "PUT",
            &uri,
            json!({ "title": "Dune Messiah", "author": "Frank Herbert", "available": false }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: BookResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.id, book.id.value());
    assert_eq!(updated.title, "Dune Messiah");
    assert!(!updated.available);

    let request = Request::builder()
        .method("DELETE")
        .uri(&uri)
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, get("/books")).await;
    let books: Vec<BookResponse> = serde_json::from_slice(&body).unwrap();
    assert!(books.is_empty());
}

// ============================================================================
// 異常系
// ============================================================================

#[tokio::test]
async fn test_create_with_empty_title_is_input_error() {
    let (catalog, app) = setup_app();

    let (status, body) = send(
        &app,
        with_json("POST", "/books", json!({ "title": "", "author": "Frank Herbert" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "EMPTY_FIELD");
    assert_eq!(error.category, "input");
    assert_eq!(catalog.access_count(), 0);
}

#[tokio::test]
async fn test_search_without_term_is_input_error() {
    let (catalog, app) = setup_app();

    let (status, body) = send(&app, get("/books/search")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "EMPTY_SEARCH_TERM");
    assert_eq!(catalog.access_count(), 0);
}

#[tokio::test]
async fn test_delete_unknown_id_is_selection_error() {
    let (_, app) = setup_app();

    let request = Request::builder()
        .method("DELETE")
        .uri("/books/404")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "RECORD_NOT_FOUND");
    assert_eq!(error.category, "selection");
}

#[tokio::test]
async fn test_store_unavailable_is_connectivity_error() {
    let (catalog, app) = setup_app();
    catalog.set_unavailable(true);

    let (status, body) = send(&app, get("/books")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "STORE_UNAVAILABLE");
    assert_eq!(error.category, "connectivity");
    assert_eq!(error.message, "Store unavailable");
}

#[tokio::test]
async fn test_store_error_is_internal_error_without_detail() {
    let (catalog, app) = setup_app();
    catalog.set_failing(true);

    let (status, body) = send(
        &app,
        with_json(
            "POST",
            "/books",
            json!({ "title": "Dune", "author": "Frank Herbert", "available": true }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "STORE_ERROR");
    assert_eq!(error.category, "connectivity");
    assert_eq!(error.message, "Store error");

    let raw = String::from_utf8(body).unwrap();
    assert!(!raw.contains("simulated"));
    assert!(!raw.contains("locked"));
}

#[tokio::test]
async fn test_unknown_sort_order_is_rejected() {
    let (_, app) = setup_app();
    let (status, _) = send(&app, get("/books?sort=author")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
