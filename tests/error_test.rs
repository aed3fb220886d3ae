//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use asset_match::error::AssetMatchError;
use asset_match::{records, reference};
use std::path::Path;
use tempfile::tempdir;

/// 存在しないマスタを読み込んだ場合
#[test]
fn test_load_nonexistent_workbook() {
    let result = reference::load_reference_table(Path::new("/nonexistent/path/assets.xlsx"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, AssetMatchError::FileNotFound(_)));
}

/// ワークブックではないファイルを読み込んだ場合
#[test]
fn test_load_invalid_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("assets.xlsx");
    std::fs::write(&path, "not a workbook").unwrap();

    let result = reference::load_reference_table(&path);
    assert!(matches!(result, Err(AssetMatchError::InvalidWorkbook(_))));
}

/// 不正なペアJSON
#[test]
fn test_load_invalid_pairs() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("pairs.json");
    std::fs::write(&path, "{ invalid }").unwrap();

    let result = records::load_pairs(&path);
    assert!(matches!(result, Err(AssetMatchError::InvalidRecords(_))));
}

/// 空配列はエラーではない
#[test]
fn test_load_empty_pairs() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("pairs.json");
    std::fs::write(&path, "[]").unwrap();

    let pairs = records::load_pairs(&path).unwrap();
    assert!(pairs.is_empty());
}

/// AssetMatchErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        AssetMatchError::Config("テスト設定エラー".to_string()),
        AssetMatchError::FileNotFound("assets.xlsx".to_string()),
        AssetMatchError::InvalidWorkbook("壊れたファイル".to_string()),
        AssetMatchError::InvalidRecords("pairs.json".to_string()),
        AssetMatchError::ExcelGeneration("Excel生成エラー".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AssetMatchError = io_err.into();

    assert!(matches!(err, AssetMatchError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: AssetMatchError = json_err.into();

    assert!(matches!(err, AssetMatchError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = asset_match_common::Error::InvalidSweepConfig("step must be positive".to_string());
    let err: AssetMatchError = common_err.into();

    assert!(matches!(err, AssetMatchError::Common(_)));
    let display = format!("{}", err);
    assert!(display.contains("step must be positive"));
}
