//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    /// 保存済みデータがスキーマに一致しない
    #[error("Corrupt record under '{key}': {source}")]
    CorruptRecord {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// 形式は正しいが値が保存時の検証を満たさない
    #[error("Invalid record under '{key}': {source}")]
    InvalidRecord {
        key: String,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// 入力検証エラー（表示文言をそのまま持つ）
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name")]
    EmptyName,

    #[error("Please enter a barcode")]
    EmptyBarcode,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
