use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "asset-match")]
#[command(about = "請求書・タイムディテールの対応付けと物件名マスタ照合ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 請求書とタイムディテールをプロジェクト番号で対応付け
    Pair {
        /// 請求書JSONファイル
        #[arg(required = true)]
        invoices: PathBuf,

        /// タイムディテールJSONファイル
        #[arg(required = true)]
        time_details: PathBuf,

        /// 出力JSONファイル
        #[arg(short, long, default_value = "pairs.json")]
        output: PathBuf,
    },

    /// ペアのプロジェクト名を物件名マスタと照合
    Match {
        /// ペアJSONファイル
        #[arg(required = true)]
        pairs: PathBuf,

        /// 物件名マスタ（xlsx）。省略時は設定値
        #[arg(short, long)]
        assets: Option<PathBuf>,

        /// 閾値の下限
        #[arg(long)]
        min: Option<u8>,

        /// 閾値の上限（含む）
        #[arg(long)]
        max: Option<u8>,

        /// 閾値の刻み
        #[arg(long)]
        step: Option<u8>,

        /// ワーカースレッド数
        #[arg(short, long)]
        workers: Option<usize>,

        /// 類似度の計算方法 (indel/levenshtein)
        #[arg(long, default_value = "indel")]
        scorer: ScorerKind,

        /// 出力形式 (json/excel/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// 出力ファイル/ディレクトリ（省略時は出力しない）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 閾値の下限を設定
        #[arg(long)]
        threshold_min: Option<u8>,

        /// 閾値の上限を設定
        #[arg(long)]
        threshold_max: Option<u8>,

        /// 閾値の刻みを設定
        #[arg(long)]
        threshold_step: Option<u8>,

        /// ワーカースレッド数を設定
        #[arg(long)]
        workers: Option<usize>,

        /// 物件名マスタのパスを設定
        #[arg(long)]
        assets: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    Json,
    Excel,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}

/// 類似度スコアラーの種類
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScorerKind {
    /// 挿入・削除ベース（デフォルト）
    #[default]
    Indel,
    /// 正規化レーベンシュタイン
    Levenshtein,
}

impl ScorerKind {
    pub fn scorer(&self) -> Box<dyn asset_match_common::SimilarityScorer> {
        match self {
            ScorerKind::Indel => Box::new(asset_match_common::IndelRatio),
            ScorerKind::Levenshtein => Box::new(asset_match_common::LevenshteinRatio),
        }
    }
}

impl std::str::FromStr for ScorerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "indel" | "ratio" => Ok(ScorerKind::Indel),
            "levenshtein" | "lev" => Ok(ScorerKind::Levenshtein),
            _ => Err(format!("Unknown scorer: {}. Use indel or levenshtein", s)),
        }
    }
}

impl std::fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScorerKind::Indel => write!(f, "indel"),
            ScorerKind::Levenshtein => write!(f, "levenshtein"),
        }
    }
}
