use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_book, delete_book, list_books, search_books, update_book,
};

/// Creates the API router with all catalog endpoints
///
/// - GET /books - List all books (`?sort=title`)
/// - GET /books/search - Search by title (`?title=...&sort=title`)
/// - POST /books - Insert a book
/// - PUT /books/:id - Replace a book's fields
/// - DELETE /books/:id - Delete a book
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/books", get(list_books).post(create_book))
        .route("/books/search", get(search_books))
        .route("/books/:id", put(update_book).delete(delete_book))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
