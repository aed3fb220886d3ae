//! Excel生成（共通ライブラリ）
//!
//! 照合結果シートとサマリーシートを持つワークブックを生成

use crate::classifier::{MatchKind, ThresholdOutcome};
use rust_xlsxwriter::*;

/// 照合結果シートの列見出し
pub const RESULT_HEADERS: &[&str] = &[
    "No.",
    "Project No.",
    "Project Name",
    "Invoice No.",
    "Invoice Page",
    "Time Detail Pages",
    "Result",
    "Candidates",
    "Matched Names",
    "Locations",
    "Word Fallback",
    "Merged File",
];

const RESULT_SHEET: &str = "Matches";
const SUMMARY_SHEET: &str = "Summary";

/// 分類の表示名
fn kind_label(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::NoMatch => "No match",
        MatchKind::FullMatch => "Full match",
        MatchKind::AmbiguousMatch => "Ambiguous",
    }
}

/// ページ番号リストを "1, 2, 3" 形式（1始まり）に
fn format_pages(pages: &[u32]) -> String {
    pages
        .iter()
        .map(|p| (p + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Excelをバッファに生成
///
/// # Arguments
/// * `outcome` - 最良閾値での分類結果
pub fn generate_excel_buffer(outcome: &ThresholdOutcome<'_>) -> Result<Vec<u8>, String> {
    build_workbook(outcome)
        .and_then(|mut workbook| workbook.save_to_buffer())
        .map_err(|e| e.to_string())
}

fn build_workbook(outcome: &ThresholdOutcome<'_>) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin);
    let highlight_format = Format::new().set_background_color(Color::RGB(0xFFF2CC));

    let sheet = workbook.add_worksheet();
    sheet.set_name(RESULT_SHEET)?;

    for (col, header) in RESULT_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    sheet.set_freeze_panes(1, 0)?;
    sheet.set_column_width(2, 36)?;
    sheet.set_column_width(8, 48)?;
    sheet.set_column_width(9, 24)?;
    sheet.set_column_width(11, 48)?;

    for (i, m) in outcome.matches.iter().enumerate() {
        let row = (i + 1) as u32;
        let invoice = &m.pair.invoice;
        let kind = m.classification.kind();
        let candidates = m.classification.candidates();

        let names = candidates
            .iter()
            .map(|r| r.name().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" | ");
        let locations = candidates
            .iter()
            .map(|r| format!("{}!{}", r.sheet, r.row_index + 1))
            .collect::<Vec<_>>()
            .join(", ");

        sheet.write_number(row, 0, (i + 1) as f64)?;
        sheet.write_string(row, 1, &invoice.project_num)?;
        sheet.write_string(row, 2, &invoice.project_name)?;
        sheet.write_string(row, 3, &invoice.invoice_num)?;
        sheet.write_number(row, 4, (invoice.page_num + 1) as f64)?;
        sheet.write_string(row, 5, format_pages(&m.pair.time_detail.pages))?;
        // 完全一致以外は要確認として色付け
        if kind == MatchKind::FullMatch {
            sheet.write_string(row, 6, kind_label(kind))?;
        } else {
            sheet.write_string_with_format(row, 6, kind_label(kind), &highlight_format)?;
        }
        sheet.write_number(row, 7, candidates.len() as f64)?;
        sheet.write_string(row, 8, names)?;
        sheet.write_string(row, 9, locations)?;
        sheet.write_boolean(row, 10, m.word_fallback)?;
        sheet.write_string(row, 11, m.pair.merged_file_name())?;
    }

    let summary = workbook.add_worksheet();
    summary.set_name(SUMMARY_SHEET)?;
    summary.set_column_width(0, 20)?;
    summary.set_column_width(1, 64)?;

    summary.write_string_with_format(0, 0, "Threshold", &header_format)?;
    summary.write_number(0, 1, outcome.threshold as f64)?;
    summary.write_string_with_format(1, 0, "Pairs", &header_format)?;
    summary.write_number(1, 1, outcome.total() as f64)?;
    summary.write_string_with_format(2, 0, "Full matches", &header_format)?;
    summary.write_number(2, 1, outcome.full_match_count as f64)?;
    summary.write_string_with_format(3, 0, "Ambiguous", &header_format)?;
    summary.write_number(3, 1, outcome.ambiguous_count as f64)?;
    summary.write_string_with_format(4, 0, "No match", &header_format)?;
    summary.write_number(4, 1, outcome.no_match_count as f64)?;

    for (i, line) in outcome.report().lines().enumerate() {
        summary.write_string(6 + i as u32, 0, line)?;
    }

    Ok(workbook)
}
