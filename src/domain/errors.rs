use super::BookField;
use thiserror::Error;

/// 書き込み前検証のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 空文字列または空白のみのフィールド
    #[error("{0} must not be empty")]
    EmptyField(BookField),
}
