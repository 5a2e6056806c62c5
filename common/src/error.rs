//! エラー型定義
//!
//! クリーニング・変換は失敗しない（欠損値になる）ため、
//! 共通ライブラリのエラーはJSON出力の失敗のみ。

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
