use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("ワークブックを読み込めません: {0}")]
    InvalidWorkbook(String),

    #[error("レコードファイルが不正: {0}")]
    InvalidRecords(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error(transparent)]
    Common(#[from] asset_match_common::Error),
}

pub type Result<T> = std::result::Result<T, AssetMatchError>;
