use crate::domain::{BookField, BookId, ValidationError};
use crate::ports::book_catalog::{BoxError, StoreFailure};
use thiserror::Error;

/// カタログ操作のエラー
///
/// ストア由来の詳細は`source`に保持し、メッセージには含めない。
#[derive(Debug, Error)]
pub enum CatalogError {
    /// タイトルまたは著者が空
    #[error("{0} must not be empty")]
    EmptyField(BookField),

    /// 検索語が空
    #[error("Search term must not be empty")]
    EmptySearchTerm,

    /// 指定IDの書籍が存在しない（既に削除された可能性を含む）
    #[error("Book {0} not found")]
    RecordNotFound(BookId),

    /// ストアに接続できない
    #[error("Store unavailable")]
    StoreUnavailable(#[source] BoxError),

    /// 接続後のクエリ・文の失敗（制約違反を含む）
    #[error("Store error")]
    StoreError(#[source] BoxError),
}

impl From<ValidationError> for CatalogError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyField(field) => CatalogError::EmptyField(field),
        }
    }
}

impl From<StoreFailure> for CatalogError {
    fn from(err: StoreFailure) -> Self {
        match err {
            StoreFailure::Unavailable(e) => CatalogError::StoreUnavailable(e),
            StoreFailure::Failed(e) => CatalogError::StoreError(e),
        }
    }
}

/// 呼び出し側が検査できるエラー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyField,
    EmptySearchTerm,
    RecordNotFound,
    StoreUnavailable,
    StoreError,
}

/// 利用者向けメッセージの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageCategory {
    /// 入力の問題
    Input,
    /// 選択した書籍の問題
    Selection,
    /// ストアとの通信の問題
    Connectivity,
}

impl MessageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageCategory::Input => "input",
            MessageCategory::Selection => "selection",
            MessageCategory::Connectivity => "connectivity",
        }
    }
}

impl ErrorKind {
    pub fn category(&self) -> MessageCategory {
        match self {
            ErrorKind::EmptyField | ErrorKind::EmptySearchTerm => MessageCategory::Input,
            ErrorKind::RecordNotFound => MessageCategory::Selection,
            ErrorKind::StoreUnavailable | ErrorKind::StoreError => MessageCategory::Connectivity,
        }
    }

    /// 機械可読なコード
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::EmptyField => "EMPTY_FIELD",
            ErrorKind::EmptySearchTerm => "EMPTY_SEARCH_TERM",
            ErrorKind::RecordNotFound => "RECORD_NOT_FOUND",
            ErrorKind::StoreUnavailable => "STORE_UNAVAILABLE",
            ErrorKind::StoreError => "STORE_ERROR",
        }
    }
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::EmptyField(_) => ErrorKind::EmptyField,
            CatalogError::EmptySearchTerm => ErrorKind::EmptySearchTerm,
            CatalogError::RecordNotFound(_) => ErrorKind::RecordNotFound,
            CatalogError::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
            CatalogError::StoreError(_) => ErrorKind::StoreError,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogError>;
