use crate::application::catalog::{
    self, CatalogDependencies, delete as execute_delete, insert as execute_insert,
    list_all as execute_list_all, search as execute_search, update as execute_update,
};
use crate::domain::{Book, BookId};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{BookRequest, BookResponse, ListBooksQuery, SearchBooksQuery, SortOrder},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub catalog_deps: CatalogDependencies,
}

fn to_response(books: Vec<Book>, sort: Option<SortOrder>) -> Json<Vec<BookResponse>> {
    let books = match sort {
        Some(SortOrder::Title) => catalog::sort_by_title(books),
        None => books,
    };
    Json(books.into_iter().map(BookResponse::from).collect())
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books - 全書籍を取得
///
/// `sort=title`指定時は取得結果をタイトル順に並べ替えて返す。
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListBooksQuery>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = execute_list_all(&state.catalog_deps).await?;
    Ok(to_response(books, query.sort))
}

/// GET /books/search?title= - タイトルで検索
///
/// 一致なしの場合は空配列を返す（エラーではない）。
pub async fn search_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchBooksQuery>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = execute_search(&state.catalog_deps, &query.title).await?;
    Ok(to_response(books, query.sort))
}

// ============================================================================
// Command handlers (POST / PUT / DELETE)
// ============================================================================

/// POST /books - 書籍を登録
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let book = execute_insert(&state.catalog_deps, req.into_new_book()).await?;
    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// PUT /books/:id - 書籍の全項目を置き換え
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<BookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = execute_update(&state.catalog_deps, BookId::new(id), req.into_new_book()).await?;
    Ok(Json(BookResponse::from(book)))
}

/// DELETE /books/:id - 書籍を削除
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    execute_delete(&state.catalog_deps, BookId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
