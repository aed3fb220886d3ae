//! JSON/Excel出力の統合テスト

use asset_match::cli::ExportFormat;
use asset_match::export::{self, json::MatchReport};
use asset_match_common::{
    classify, IndelRatio, Invoice, MatchKind, PairedRecord, ReferenceTable, Sheet, TimeDetail,
};
use calamine::{open_workbook_auto, Data, Reader};
use tempfile::tempdir;

fn create_table() -> ReferenceTable {
    let mut rows = vec![vec![Some("Asset Assignments".to_string())], vec![None]];
    for name in ["Maple Tower", "River Park", "River Side"] {
        rows.push(vec![None, None, None, Some(name.to_string())]);
    }
    ReferenceTable::new(vec![Sheet::from_cells("East", rows)])
}

fn create_pair(index: u32, name: &str) -> PairedRecord {
    PairedRecord::new(
        Invoice {
            page_num: index,
            project_name: name.to_string(),
            project_num: format!("P{}", index),
            invoice_num: format!("INV{}", index),
            am_email: String::new(),
        },
        TimeDetail {
            pages: vec![index * 2, index * 2 + 1],
            project_num: format!("P{}", index),
        },
    )
}

fn create_pairs() -> Vec<PairedRecord> {
    vec![
        create_pair(0, "Maple Tower"),
        create_pair(1, "River"),
        create_pair(2, "Nowhere"),
    ]
}

#[test]
fn test_json_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let table = create_table();
    let pairs = create_pairs();
    let outcome = classify(&table, &pairs, 60, &IndelRatio).unwrap();

    let written = export::export_results(&outcome, &ExportFormat::Json, dir.path(), "results")
        .expect("JSON出力に失敗");
    assert_eq!(written, vec![dir.path().join("results.json")]);

    let content = std::fs::read_to_string(&written[0]).unwrap();
    let report: MatchReport = serde_json::from_str(&content).unwrap();
    assert_eq!(report.threshold, 60);
    assert_eq!(report.summary.len(), 3);
    assert_eq!(report.matches.len(), 3);
    assert_eq!(report.matches[0].result, MatchKind::FullMatch);
    assert_eq!(report.matches[1].result, MatchKind::AmbiguousMatch);
    assert_eq!(report.matches[1].candidates.len(), 2);
    assert_eq!(report.matches[2].result, MatchKind::NoMatch);
    assert_eq!(report.matches[0].merged_file, "ASM_AN_P0_Maple Tower_INV0.pdf");
}

#[test]
fn test_excel_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("results.xlsx");
    let table = create_table();
    let pairs = create_pairs();
    let outcome = classify(&table, &pairs, 60, &IndelRatio).unwrap();

    export::export_results(&outcome, &ExportFormat::Excel, &output, "results")
        .expect("Excel出力に失敗");
    assert!(output.exists(), "Excelファイルが作成されていない");

    let mut workbook = open_workbook_auto(&output).expect("Excel読み込み失敗");
    assert_eq!(workbook.sheet_names(), vec!["Matches".to_string(), "Summary".to_string()]);

    let range = workbook.worksheet_range("Matches").unwrap();
    // ヘッダー + 3ペア
    assert_eq!(range.height(), 4);
    assert_eq!(range.get_value((1, 2)), Some(&Data::String("Maple Tower".to_string())));
    assert_eq!(range.get_value((2, 6)), Some(&Data::String("Ambiguous".to_string())));
}

#[test]
fn test_both_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let table = create_table();
    let pairs = create_pairs();
    let outcome = classify(&table, &pairs, 60, &IndelRatio).unwrap();

    let written = export::export_results(
        &outcome,
        &ExportFormat::Both,
        &dir.path().join("run1.json"),
        "results",
    )
    .unwrap();

    assert_eq!(written.len(), 2);
    assert!(dir.path().join("run1.json").exists());
    assert!(dir.path().join("run1.xlsx").exists());
}
