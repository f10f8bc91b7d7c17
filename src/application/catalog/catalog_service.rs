use crate::domain::{self, Book, BookId, NewBook};
use crate::ports::BookCatalog;
use std::sync::Arc;

use super::errors::{CatalogError, Result};

/// サービスの依存関係
///
/// 振る舞いは持たず、各操作の関数に明示的に渡す。
#[derive(Clone)]
pub struct CatalogDependencies {
    pub book_catalog: Arc<dyn BookCatalog>,
}

/// ストア由来のエラーを分類してログに記録する
fn store_error(operation: &'static str, err: crate::ports::StoreFailure) -> CatalogError {
    let err = CatalogError::from(err);
    if let Some(source) = std::error::Error::source(&err) {
        tracing::error!(operation, kind = ?err.kind(), error = %source, "catalog store failure");
    }
    err
}

/// 書き込み前の検証（ストアには一切アクセスしない）
fn validate(book: &NewBook) -> Result<()> {
    domain::validate_for_write(&book.title, &book.author).map_err(|e| {
        tracing::warn!(error = %e, "rejected book before store access");
        CatalogError::from(e)
    })
}

/// 全書籍を取得する
///
/// 呼び出しごとに新しく読み込んだスナップショットを返す。
/// 失敗時に途中までの結果を返すことはない。
pub async fn list_all(deps: &CatalogDependencies) -> Result<Vec<Book>> {
    tracing::debug!("listing all books");

    deps.book_catalog
        .fetch_all()
        .await
        .map_err(|e| store_error("list_all", e))
}

/// タイトルで検索する
///
/// 大文字小文字を区別しない部分一致。著者は対象外。
/// 空白のみの検索語はストアにアクセスせず`EmptySearchTerm`。
/// 一致なしはエラーではなく空のVec。
///
/// 検索語は前後の空白を除いてから照合する。
pub async fn search(deps: &CatalogDependencies, term: &str) -> Result<Vec<Book>> {
    let term = term.trim();
    if term.is_empty() {
        tracing::warn!("rejected empty search term");
        return Err(CatalogError::EmptySearchTerm);
    }

    tracing::debug!(term, "searching books by title");

    deps.book_catalog
        .fetch_by_title(term)
        .await
        .map_err(|e| store_error("search", e))
}

/// 書籍を登録する
///
/// # 戻り値
/// ストアが採番したIDを持つ登録済みの書籍
///
/// # エラー
/// - EmptyField: タイトルまたは著者が空（ストアにはアクセスしない）
/// - StoreUnavailable / StoreError: 接続または文の失敗
pub async fn insert(deps: &CatalogDependencies, book: NewBook) -> Result<Book> {
    validate(&book)?;

    let stored = deps
        .book_catalog
        .insert(&book)
        .await
        .map_err(|e| store_error("insert", e))?;

    tracing::debug!(id = %stored.id, "inserted book");
    Ok(stored)
}

/// 書籍の全項目を置き換える
///
/// タイトル・著者・貸出可否の3項目を単一の文でまとめて更新する。
/// 楽観ロックは行わない（同一IDへの同時更新は後勝ち）。
///
/// # エラー
/// - EmptyField: Insertと同じ検証
/// - RecordNotFound: 更新件数が0（取得後に削除された場合を含む）
/// - StoreUnavailable / StoreError: 接続または文の失敗
pub async fn update(deps: &CatalogDependencies, id: BookId, book: NewBook) -> Result<Book> {
    validate(&book)?;

    let affected = deps
        .book_catalog
        .update(id, &book)
        .await
        .map_err(|e| store_error("update", e))?;

    if affected == 0 {
        tracing::warn!(%id, "update matched no book");
        return Err(CatalogError::RecordNotFound(id));
    }

    tracing::debug!(%id, "updated book");
    Ok(book.with_id(id))
}

/// 書籍を削除する
///
/// # エラー
/// - RecordNotFound: 削除件数が0
/// - StoreUnavailable / StoreError: 接続または文の失敗
pub async fn delete(deps: &CatalogDependencies, id: BookId) -> Result<()> {
    let affected = deps
        .book_catalog
        .delete(id)
        .await
        .map_err(|e| store_error("delete", e))?;

    if affected == 0 {
        tracing::warn!(%id, "delete matched no book");
        return Err(CatalogError::RecordNotFound(id));
    }

    tracing::debug!(%id, "deleted book");
    Ok(())
}

/// 取得済みの書籍をタイトル順に並べ替える（純粋な関数）
///
/// 大文字小文字を区別しない辞書順。同じキーの書籍は入力順を保つ（安定ソート）。
/// ストアには問い合わせない。
pub fn sort_by_title(mut books: Vec<Book>) -> Vec<Book> {
    books.sort_by_cached_key(|book| book.title.to_lowercase());
    books
}
