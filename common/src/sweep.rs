//! 閾値スイープ
//!
//! 閾値の範囲を並列に分類し、完全一致件数が最大の閾値を選ぶ。
//! 選んだ閾値で改めて分類し、最終結果とレポートを得る。

use crate::classifier::{classify, ThresholdOutcome};
use crate::error::{Error, Result};
use crate::similarity::SimilarityScorer;
use crate::types::{PairedRecord, ReferenceTable};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// スイープ設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepConfig {
    pub threshold_min: u8,
    pub threshold_max: u8,
    pub threshold_step: u8,
    /// ワーカースレッド数
    pub worker_count: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            threshold_min: 30,
            threshold_max: 70,
            threshold_step: 2,
            worker_count: 16,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        if self.threshold_step == 0 {
            return Err(Error::InvalidSweepConfig("threshold step must be positive".into()));
        }
        if self.threshold_min > self.threshold_max {
            return Err(Error::InvalidSweepConfig(format!(
                "threshold min {} is greater than max {}",
                self.threshold_min, self.threshold_max
            )));
        }
        if self.threshold_max > 100 {
            return Err(Error::InvalidSweepConfig(format!(
                "threshold max {} exceeds 100",
                self.threshold_max
            )));
        }
        if self.worker_count == 0 {
            return Err(Error::InvalidSweepConfig("worker count must be positive".into()));
        }
        Ok(())
    }

    /// 評価する閾値（昇順、上限を含む）
    pub fn thresholds(&self) -> Vec<u8> {
        if self.threshold_step == 0 {
            return Vec::new();
        }
        (self.threshold_min..=self.threshold_max)
            .step_by(self.threshold_step as usize)
            .collect()
    }
}

/// 閾値ごとの集計（並列スイープの出力）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdSummary {
    pub threshold: u8,
    /// 分類不能（ペアなし）の場合は None
    pub full_match_count: Option<usize>,
}

/// スイープ結果
#[derive(Debug, Clone)]
pub struct SweepResult<'a> {
    pub best_threshold: u8,
    pub full_match_count: usize,
    /// 最良閾値での最終分類
    pub outcome: ThresholdOutcome<'a>,
    /// 評価した全閾値の集計（昇順）
    pub summaries: Vec<ThresholdSummary>,
}

impl SweepResult<'_> {
    pub fn report(&self) -> String {
        self.outcome.report()
    }
}

/// 完全一致件数が最大の閾値を選ぶ
///
/// 同数なら先に現れた（低い）閾値を採用する。完全一致0件は採用しない。
pub fn pick_best(summaries: &[ThresholdSummary]) -> Option<(u8, usize)> {
    let mut best: (u8, usize) = (0, 0);
    for summary in summaries {
        if let Some(count) = summary.full_match_count {
            if best.1 < count {
                best = (summary.threshold, count);
            }
        }
    }
    (best.1 > 0).then_some(best)
}

/// 閾値スイープを実行する
///
/// `Ok(None)` は有効な閾値が見つからなかったことを表す。
pub fn search<'a>(
    table: &'a ReferenceTable,
    pairs: &'a [PairedRecord],
    config: &SweepConfig,
    scorer: &dyn SimilarityScorer,
) -> Result<Option<SweepResult<'a>>> {
    search_with_progress(table, pairs, config, scorer, |_| {})
}

/// 閾値スイープ（閾値ごとの完了通知付き）
pub fn search_with_progress<'a, F>(
    table: &'a ReferenceTable,
    pairs: &'a [PairedRecord],
    config: &SweepConfig,
    scorer: &dyn SimilarityScorer,
    on_threshold_done: F,
) -> Result<Option<SweepResult<'a>>>
where
    F: Fn(u8) + Sync,
{
    config.validate()?;

    let thresholds = config.thresholds();

    // プールはこの呼び出しの間だけ生存する
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_count)
        .build()
        .map_err(|e| Error::WorkerPool(e.to_string()))?;

    // 完了順に依存しないよう、閾値順に全件集めてから比較する
    let summaries: Vec<ThresholdSummary> = pool.install(|| {
        thresholds
            .par_iter()
            .map(|&threshold| {
                let full_match_count =
                    classify(table, pairs, threshold, scorer).map(|o| o.full_match_count);
                tracing::debug!(threshold, ?full_match_count, "threshold evaluated");
                on_threshold_done(threshold);
                ThresholdSummary {
                    threshold,
                    full_match_count,
                }
            })
            .collect()
    });

    let Some((best_threshold, full_match_count)) = pick_best(&summaries) else {
        tracing::debug!(evaluated = summaries.len(), "no usable threshold");
        return Ok(None);
    };

    let Some(outcome) = classify(table, pairs, best_threshold, scorer) else {
        return Ok(None);
    };

    Ok(Some(SweepResult {
        best_threshold,
        full_match_count,
        outcome,
        summaries,
    }))
}
