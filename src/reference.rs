//! 物件名マスタ（asset assignments ワークブック）読み込み
//!
//! 全シートを読み込み、セル位置をシート左上基準に揃えて保持する。

use crate::error::{AssetMatchError, Result};
use asset_match_common::{ReferenceTable, Sheet};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// ワークブックを読み込む（xlsx / xls / ods）
pub fn load_reference_table(path: &Path) -> Result<ReferenceTable> {
    if !path.exists() {
        return Err(AssetMatchError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| AssetMatchError::InvalidWorkbook(format!("{}: {}", path.display(), e)))?;

    let names = workbook.sheet_names();
    let sheets = read_sheets(names, |name| workbook.worksheet_range(name));

    Ok(ReferenceTable::new(sheets))
}

/// シートを順に読み込む。読めないシートは警告して飛ばす
fn read_sheets<E, F>(names: Vec<String>, mut read: F) -> Vec<Sheet>
where
    E: std::fmt::Display,
    F: FnMut(&str) -> std::result::Result<Range<Data>, E>,
{
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        match read(&name) {
            Ok(range) => {
                tracing::debug!(sheet = %name, rows = range.height(), "sheet loaded");
                sheets.push(Sheet::from_cells(name, range_to_cells(&range)));
            }
            Err(e) => {
                tracing::warn!(sheet = %name, error = %e, "sheet skipped");
            }
        }
    }
    sheets
}

/// Range をシート左上（A1）基準の行列に変換
///
/// calamine の Range は最初の使用セルから始まるため、
/// 先頭の空行・空列を補って列番号を揃える。
fn range_to_cells(range: &Range<Data>) -> Vec<Vec<Option<String>>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<Option<String>>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells: Vec<Option<String>> = vec![None; start_col as usize];
        cells.extend(row.iter().map(cell_text));
        rows.push(cells);
    }
    rows
}

/// セル値を文字列に（空セル・エラーセルは None）
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            Some((*f as i64).to_string())
        }
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::String("Oak Court".into())), Some("Oak Court".into()));
        assert_eq!(cell_text(&Data::Int(42)), Some("42".into()));
        assert_eq!(cell_text(&Data::Float(1200.0)), Some("1200".into()));
        assert_eq!(cell_text(&Data::Float(1.5)), Some("1.5".into()));
        assert_eq!(cell_text(&Data::Bool(true)), Some("true".into()));
    }

    #[test]
    fn test_range_offset_is_padded() {
        // B3 から始まる Range
        let mut range = Range::new((2, 1), (3, 4));
        range.set_value((2, 4), Data::String("Maple Tower".into()));
        range.set_value((3, 1), Data::Int(7));

        let rows = range_to_cells(&range);
        assert_eq!(rows.len(), 4);
        assert!(rows[0].is_empty());
        assert!(rows[1].is_empty());
        assert_eq!(rows[2][4].as_deref(), Some("Maple Tower"));
        assert_eq!(rows[3][1].as_deref(), Some("7"));
        assert_eq!(rows[3][0], None);
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(range_to_cells(&range).is_empty());
    }

    #[test]
    fn test_unreadable_sheet_is_skipped() {
        let names = vec!["East".to_string(), "Broken".to_string(), "West".to_string()];
        let sheets = read_sheets(names, |name| {
            if name == "Broken" {
                return Err(format!("{}: corrupt sheet", name));
            }
            let mut range = Range::new((0, 0), (2, 3));
            range.set_value((2, 3), Data::String(format!("{} Tower", name)));
            Ok(range)
        });

        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[0].name, "East");
        assert_eq!(sheets[1].name, "West");
        assert_eq!(sheets[1].data_rows()[0].name(), Some("West Tower"));
    }

    #[test]
    fn test_missing_workbook() {
        let result = load_reference_table(Path::new("/nonexistent/asset_assignments.xlsx"));
        assert!(matches!(result, Err(AssetMatchError::FileNotFound(_))));
    }
}
