use crate::config::StoreConfig;
use crate::domain::{Book, BookId, NewBook};
use crate::ports::book_catalog::{BookCatalog as BookCatalogTrait, Result, StoreFailure};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgRow};
use sqlx::{Connection, PgConnection, Row};

/// 接続確立後のエラーを分類する
fn failed(err: sqlx::Error) -> StoreFailure {
    StoreFailure::Failed(Box::new(err))
}

/// PostgreSQLの行データをBookに変換する
///
/// 列の欠落や型の不一致はパニックせずに`StoreFailure::Failed`として返す。
fn map_row_to_book(row: &PgRow) -> Result<Book> {
    Ok(Book {
        id: BookId::new(row.try_get("book_id").map_err(failed)?),
        title: row.try_get("title").map_err(failed)?,
        author: row.try_get("author").map_err(failed)?,
        available: row.try_get("available").map_err(failed)?,
    })
}

/// 操作ごとの接続を閉じる
///
/// 閉じる処理の失敗は操作結果に影響させない（接続はドロップ時に破棄される）。
async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::debug!(error = %e, "catalog connection did not close cleanly");
    }
}

/// BookCatalogのPostgreSQL実装
///
/// コネクションプールは持たない。各操作はその操作の間だけ接続を確立し、
/// 成功・失敗いずれの経路でも操作の終了時に解放する。
/// SQLはすべてバインドパラメータを使い、文字列連結はしない。
pub struct BookCatalog {
    options: PgConnectOptions,
}

impl BookCatalog {
    /// 接続設定から新しいBookCatalogを作成
    pub fn new(config: &StoreConfig) -> Self {
        Self::from_options(config.connect_options())
    }

    /// sqlxの接続オプションから作成（DATABASE_URLを使うテスト等）
    pub fn from_options(options: PgConnectOptions) -> Self {
        Self { options }
    }

    /// この操作専用の接続を確立する
    ///
    /// 確立できない場合は`StoreFailure::Unavailable`。
    async fn connect(&self) -> Result<PgConnection> {
        PgConnection::connect_with(&self.options)
            .await
            .map_err(|e| StoreFailure::Unavailable(Box::new(e)))
    }
}

#[async_trait]
impl BookCatalogTrait for BookCatalog {
    async fn fetch_all(&self) -> Result<Vec<Book>> {
        let mut conn = self.connect().await?;

        let result = sqlx::query(
            r#"
            SELECT book_id, title, author, available
            FROM books
            ORDER BY book_id
            "#,
        )
        .fetch_all(&mut conn)
        .await;

        release(conn).await;

        result.map_err(failed)?.iter().map(map_row_to_book).collect()
    }

    /// タイトルの部分一致検索（大文字小文字を区別しない）
    ///
    /// 全件を1回の問い合わせで読み込み、`Book::title_matches`で絞り込む。
    /// SQLの`lower()`はデータベースのLC_CTYPEに依存するため使わない。
    /// インメモリ実装と同じ判定になり、`%`や`_`もリテラルとして扱われる。
    async fn fetch_by_title(&self, term: &str) -> Result<Vec<Book>> {
        let books = self.fetch_all().await?;
        Ok(books
            .into_iter()
            .filter(|book| book.title_matches(term))
            .collect())
    }

    /// 1行を挿入し、採番されたIDとともに返す
    async fn insert(&self, book: &NewBook) -> Result<Book> {
        let mut conn = self.connect().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO books (title, author, available)
            VALUES ($1, $2, $3)
            RETURNING book_id, title, author, available
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.available)
        .fetch_one(&mut conn)
        .await;

        release(conn).await;

        map_row_to_book(&result.map_err(failed)?)
    }

    /// 3つの可変フィールドを単一のUPDATE文でまとめて置き換える
    async fn update(&self, id: BookId, book: &NewBook) -> Result<u64> {
        let mut conn = self.connect().await?;

        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $1, author = $2, available = $3
            WHERE book_id = $4
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.available)
        .bind(id.value())
        .execute(&mut conn)
        .await;

        release(conn).await;

        Ok(result.map_err(failed)?.rows_affected())
    }

    async fn delete(&self, id: BookId) -> Result<u64> {
        let mut conn = self.connect().await?;

        let result = sqlx::query("DELETE FROM books WHERE book_id = $1")
            .bind(id.value())
            .execute(&mut conn)
            .await;

        release(conn).await;

        Ok(result.map_err(failed)?.rows_affected())
    }
}
