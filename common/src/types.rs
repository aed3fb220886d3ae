//! レコード型定義
//!
//! CLIとエクスポートで共有される型:
//! - Invoice / TimeDetail: PDFから抽出された請求書・タイムディテール
//! - PairedRecord: プロジェクト番号で対応付けたペア
//! - ReferenceTable: 物件名マスタ（ワークブック全シート）

use serde::{Deserialize, Serialize};

/// 物件名が入っている列（0始まり）
pub const NAME_COLUMN: usize = 3;

/// 各シート先頭のヘッダー行数
pub const HEADER_ROWS: usize = 2;

/// 請求書1ページ分
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// 請求書PDF内のページ番号（0始まり）
    pub page_num: u32,

    #[serde(default)]
    pub project_name: String,

    pub project_num: String,

    #[serde(default)]
    pub invoice_num: String,

    /// 担当AMのメールアドレス（無ければ空）
    #[serde(default)]
    pub am_email: String,
}

/// タイムディテール（複数ページにまたがる）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeDetail {
    pub pages: Vec<u32>,
    pub project_num: String,
}

/// 請求書とタイムディテールのペア
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairedRecord {
    pub invoice: Invoice,
    pub time_detail: TimeDetail,
}

impl PairedRecord {
    pub fn new(invoice: Invoice, time_detail: TimeDetail) -> Self {
        Self { invoice, time_detail }
    }

    /// 照合に使うプロジェクト名
    pub fn project_name(&self) -> &str {
        &self.invoice.project_name
    }

    /// 結合PDFの出力ファイル名
    ///
    /// `ASM_AN_{プロジェクト番号}_{プロジェクト名}_{請求書番号}.pdf`
    /// パス区切り文字はプロジェクト名から `.` に置換する。
    pub fn merged_file_name(&self) -> String {
        let safe_name = self.invoice.project_name.replace(['\\', '/'], ".");
        format!(
            "ASM_AN_{}_{}_{}.pdf",
            self.invoice.project_num, safe_name, self.invoice.invoice_num
        )
    }
}

/// 物件名マスタの1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRow {
    pub sheet: String,
    /// シート内の行番号（0始まり、ヘッダー行を含む）
    pub row_index: usize,
    pub cells: Vec<Option<String>>,
}

impl ReferenceRow {
    pub fn new(sheet: impl Into<String>, row_index: usize, cells: Vec<Option<String>>) -> Self {
        Self {
            sheet: sheet.into(),
            row_index,
            cells,
        }
    }

    /// 指定列のセル値（範囲外・空セルは None）
    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells
            .get(column)
            .and_then(|c| c.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// 物件名セル
    ///
    /// 列数が足りない行は「物件名なし」として扱う。
    pub fn name(&self) -> Option<&str> {
        self.cell(NAME_COLUMN)
    }
}

/// ワークシート
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<ReferenceRow>,
}

impl Sheet {
    /// 生のセル値からシートを組み立てる（行番号は出現順）
    pub fn from_cells(name: impl Into<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let name = name.into();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, cells)| ReferenceRow::new(name.clone(), i, cells))
            .collect();
        Self { name, rows }
    }

    /// ヘッダー行を除いたデータ行
    pub fn data_rows(&self) -> &[ReferenceRow] {
        self.rows.get(HEADER_ROWS..).unwrap_or(&[])
    }
}

/// 物件名マスタ全体（シート順を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTable {
    pub sheets: Vec<Sheet>,
}

impl ReferenceTable {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.iter().all(|s| s.data_rows().is_empty())
    }

    /// 全シートのデータ行数
    pub fn data_row_count(&self) -> usize {
        self.sheets.iter().map(|s| s.data_rows().len()).sum()
    }
}
