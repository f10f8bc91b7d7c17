use super::{BookField, BookId, ValidationError};
use serde::{Deserialize, Serialize};

/// 永続化済みの書籍
///
/// List/Searchが返すのはスナップショットであり、取得後のストアの変更には
/// 追従しない。更新・削除は常に`id`を明示して行う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub available: bool,
}

impl Book {
    /// タイトルの部分一致判定（大文字小文字を区別しない、著者は対象外）
    ///
    /// 大文字小文字の畳み込みはUnicodeの`to_lowercase`で行い、
    /// ストアのロケールには依存しない。
    pub fn title_matches(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }
}

/// まだIDを持たない書籍（挿入・全項目更新の入力）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub available: bool,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, available: bool) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            available,
        }
    }

    /// 検証を通った入力にIDを付与して永続化済みの書籍にする
    pub fn with_id(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            available: self.available,
        }
    }
}

/// 書き込み前の検証
///
/// 前後の空白を除いて空になるタイトル・著者は`EmptyField`。
/// タイトルを先に検査する。値そのものは変更しない。
pub fn validate_for_write(title: &str, author: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyField(BookField::Title));
    }
    if author.trim().is_empty() {
        return Err(ValidationError::EmptyField(BookField::Author));
    }
    Ok(())
}
