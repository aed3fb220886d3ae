//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid sweep config: {0}")]
    InvalidSweepConfig(String),

    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
