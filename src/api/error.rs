use crate::application::catalog::CatalogError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();

        let status = match &self.0 {
            // 422 Unprocessable Entity - 入力の問題
            CatalogError::EmptyField(_) | CatalogError::EmptySearchTerm => {
                StatusCode::UNPROCESSABLE_ENTITY
            }

            // 404 Not Found - 選択した書籍が存在しない
            CatalogError::RecordNotFound(_) => StatusCode::NOT_FOUND,

            // 5xx - ストア障害
            // 詳細はアプリケーション層でログ済み。クライアントには一般的なメッセージのみを返す
            CatalogError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            CatalogError::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(
            kind.code(),
            kind.category().as_str(),
            self.0.to_string(),
        ));
        (status, body).into_response()
    }
}
