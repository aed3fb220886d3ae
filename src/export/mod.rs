pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::Result;
use asset_match_common::ThresholdOutcome;
use std::path::{Path, PathBuf};

/// 出力先と拡張子から書き出しパスを決める
///
/// ディレクトリ（または拡張子なし）なら `title.ext`、ファイル指定なら拡張子を差し替える。
fn output_path(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.with_extension(extension)
    }
}

/// 照合結果を出力し、書き出したパスを返す
pub fn export_results(
    outcome: &ThresholdOutcome<'_>,
    format: &ExportFormat,
    output: &Path,
    title: &str,
) -> Result<Vec<PathBuf>> {
    let (write_json, write_excel) = match format {
        ExportFormat::Json => (true, false),
        ExportFormat::Excel => (false, true),
        ExportFormat::Both => (true, true),
    };

    let mut written = Vec::new();
    if write_json {
        let json_path = output_path(output, title, "json");
        json::write_json(outcome, &json_path)?;
        written.push(json_path);
    }
    if write_excel {
        let excel_path = output_path(output, title, "xlsx");
        excel::generate_excel(outcome, &excel_path)?;
        written.push(excel_path);
    }

    for path in &written {
        println!("✔ 出力: {}", path.display());
    }

    Ok(written)
}
