//! 閾値ごとのマッチ分類
//!
//! 各ペアのプロジェクト名をマスタと照合し、
//! 一致なし / 完全一致（候補1件） / 部分一致（候補複数）に分類する。
//!
//! ## 処理フロー
//! 1. プロジェクト名全体で候補検索
//! 2. 候補0件なら、6文字以上の単語ごとに再検索して候補を連結
//! 3. 候補件数で分類

use crate::candidates::find_candidates;
use crate::similarity::SimilarityScorer;
use crate::types::{PairedRecord, ReferenceRow, ReferenceTable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 単語単位の再検索で対象にする最小文字数（これより長い単語のみ）
pub const FALLBACK_MIN_WORD_LEN: usize = 5;

/// 分類の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchKind {
    NoMatch,
    FullMatch,
    AmbiguousMatch,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::NoMatch => write!(f, "no match"),
            MatchKind::FullMatch => write!(f, "full match"),
            MatchKind::AmbiguousMatch => write!(f, "ambiguous"),
        }
    }
}

/// 1ペアの分類結果
#[derive(Debug, Clone, PartialEq)]
pub enum Classification<'a> {
    NoMatch,
    FullMatch(&'a ReferenceRow),
    AmbiguousMatch(Vec<&'a ReferenceRow>),
}

impl<'a> Classification<'a> {
    /// 候補件数から分類を決める
    pub fn from_candidates(mut candidates: Vec<&'a ReferenceRow>) -> Self {
        match candidates.len() {
            0 => Classification::NoMatch,
            1 => Classification::FullMatch(candidates.remove(0)),
            _ => Classification::AmbiguousMatch(candidates),
        }
    }

    pub fn kind(&self) -> MatchKind {
        match self {
            Classification::NoMatch => MatchKind::NoMatch,
            Classification::FullMatch(_) => MatchKind::FullMatch,
            Classification::AmbiguousMatch(_) => MatchKind::AmbiguousMatch,
        }
    }

    pub fn candidates(&self) -> &[&'a ReferenceRow] {
        match self {
            Classification::NoMatch => &[],
            Classification::FullMatch(row) => std::slice::from_ref(row),
            Classification::AmbiguousMatch(rows) => rows,
        }
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates().len()
    }
}

/// ペアと分類結果
#[derive(Debug, Clone, PartialEq)]
pub struct PairMatch<'a> {
    pub pair: &'a PairedRecord,
    pub classification: Classification<'a>,
    /// 単語単位の再検索で候補を得たか
    pub word_fallback: bool,
}

/// 部分一致の候補件数統計
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbiguousStats {
    pub avg: f64,
    pub min: usize,
    pub max: usize,
}

impl AmbiguousStats {
    /// 件数リストから統計を計算（空なら None）
    pub fn from_counts(counts: &[usize]) -> Option<Self> {
        let min = *counts.iter().min()?;
        let max = *counts.iter().max()?;
        let avg = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        Some(Self { avg, min, max })
    }
}

/// 1つの閾値での分類結果
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdOutcome<'a> {
    pub threshold: u8,
    pub full_match_count: usize,
    pub ambiguous_count: usize,
    pub no_match_count: usize,
    /// 部分一致が1件も無ければ None
    pub ambiguous: Option<AmbiguousStats>,
    pub matches: Vec<PairMatch<'a>>,
}

impl ThresholdOutcome<'_> {
    pub fn total(&self) -> usize {
        self.matches.len()
    }

    pub fn full_match_ratio(&self) -> f64 {
        self.ratio(self.full_match_count)
    }

    pub fn partial_match_ratio(&self) -> f64 {
        self.ratio(self.ambiguous_count)
    }

    pub fn no_match_ratio(&self) -> f64 {
        self.ratio(self.no_match_count)
    }

    fn ratio(&self, count: usize) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        count as f64 / self.total() as f64
    }

    /// 整数パーセント（切り捨て）
    fn percent(&self, count: usize) -> usize {
        if self.total() == 0 {
            return 0;
        }
        count * 100 / self.total()
    }

    /// 3行のサマリー
    pub fn report(&self) -> String {
        let partial = match &self.ambiguous {
            Some(stats) => format!(
                "Partial match for {}% with avg. count {}. Min: {}, Max: {}",
                self.percent(self.ambiguous_count),
                stats.avg as usize,
                stats.min,
                stats.max
            ),
            None => format!(
                "Partial match for {}% with avg. count n/a. Min: n/a, Max: n/a",
                self.percent(self.ambiguous_count)
            ),
        };

        format!(
            "{}\nFull match for {}%\nNo match for {}%",
            partial,
            self.percent(self.full_match_count),
            self.percent(self.no_match_count)
        )
    }
}

/// 1ペアを分類する
pub fn classify_pair<'a>(
    table: &'a ReferenceTable,
    pair: &'a PairedRecord,
    threshold: u8,
    scorer: &dyn SimilarityScorer,
) -> PairMatch<'a> {
    let name = pair.project_name();

    // プロジェクト名なしは照合しない
    if name.is_empty() {
        return PairMatch {
            pair,
            classification: Classification::NoMatch,
            word_fallback: false,
        };
    }

    let mut candidates = find_candidates(table, name, threshold, scorer);
    let mut word_fallback = false;

    if candidates.is_empty() {
        // 同じ行が複数の単語でヒットしても重複除去しない
        candidates = name
            .split(' ')
            .filter(|word| word.chars().count() > FALLBACK_MIN_WORD_LEN)
            .flat_map(|word| find_candidates(table, word, threshold, scorer))
            .collect();
        word_fallback = !candidates.is_empty();
    }

    PairMatch {
        pair,
        classification: Classification::from_candidates(candidates),
        word_fallback,
    }
}

/// 全ペアを1つの閾値で分類する
///
/// ペアが空の場合は None（統計が定義できない）。
pub fn classify<'a>(
    table: &'a ReferenceTable,
    pairs: &'a [PairedRecord],
    threshold: u8,
    scorer: &dyn SimilarityScorer,
) -> Option<ThresholdOutcome<'a>> {
    if pairs.is_empty() {
        return None;
    }

    let matches: Vec<PairMatch<'a>> = pairs
        .iter()
        .map(|pair| classify_pair(table, pair, threshold, scorer))
        .collect();

    let mut full_match_count = 0;
    let mut no_match_count = 0;
    let mut ambiguous_counts = Vec::new();

    for m in &matches {
        match &m.classification {
            Classification::NoMatch => no_match_count += 1,
            Classification::FullMatch(_) => full_match_count += 1,
            Classification::AmbiguousMatch(rows) => ambiguous_counts.push(rows.len()),
        }
    }

    Some(ThresholdOutcome {
        threshold,
        full_match_count,
        ambiguous_count: ambiguous_counts.len(),
        no_match_count,
        ambiguous: AmbiguousStats::from_counts(&ambiguous_counts),
        matches,
    })
}
