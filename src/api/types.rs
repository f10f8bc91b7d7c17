use serde::{Deserialize, Serialize};

use crate::domain::{Book, NewBook};

/// 書籍の登録・更新リクエスト（POST /books, PUT /books/:id）
///
/// 全項目置き換えのため部分更新は受け付けない。
/// `available`は省略時false。
#[derive(Debug, Deserialize)]
pub struct BookRequest {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub available: bool,
}

impl BookRequest {
    pub fn into_new_book(self) -> NewBook {
        NewBook::new(self.title, self.author, self.available)
    }
}

/// 並び順の指定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// タイトル順（大文字小文字を区別しない）
    Title,
}

/// 一覧取得のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    pub sort: Option<SortOrder>,
}

/// タイトル検索のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct SearchBooksQuery {
    #[serde(default)]
    pub title: String,
    pub sort: Option<SortOrder>,
}

/// 書籍レスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookResponse {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub available: bool,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.value(),
            title: book.title,
            author: book.author,
            available: book.available,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub category: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(
        error: impl Into<String>,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            category: category.into(),
            message: message.into(),
        }
    }
}
