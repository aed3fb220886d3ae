//! Excel生成（CLI版）
//!
//! 共通ライブラリの excel_core でバッファを生成して書き出す

use crate::error::{AssetMatchError, Result};
use asset_match_common::export::excel_core::generate_excel_buffer;
use asset_match_common::ThresholdOutcome;
use std::path::Path;

pub fn generate_excel(outcome: &ThresholdOutcome<'_>, output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(outcome).map_err(AssetMatchError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, buffer)
        .map_err(|e| AssetMatchError::ExcelGeneration(format!("書き込みエラー: {}", e)))?;

    Ok(())
}
