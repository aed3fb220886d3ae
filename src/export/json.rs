//! JSON出力

use crate::error::Result;
use asset_match_common::{MatchKind, PairedRecord, ReferenceRow, ThresholdOutcome};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 1ペア分の照合結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub pair: PairedRecord,
    pub result: MatchKind,
    pub candidates: Vec<ReferenceRow>,
    pub word_fallback: bool,
    pub merged_file: String,
}

/// 照合結果ファイル全体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub threshold: u8,
    pub full_match_count: usize,
    pub ambiguous_count: usize,
    pub no_match_count: usize,
    pub summary: Vec<String>,
    pub matches: Vec<MatchRecord>,
}

impl MatchReport {
    pub fn from_outcome(outcome: &ThresholdOutcome<'_>) -> Self {
        let matches = outcome
            .matches
            .iter()
            .map(|m| MatchRecord {
                pair: m.pair.clone(),
                result: m.classification.kind(),
                candidates: m
                    .classification
                    .candidates()
                    .iter()
                    .map(|&row| row.clone())
                    .collect(),
                word_fallback: m.word_fallback,
                merged_file: m.pair.merged_file_name(),
            })
            .collect();

        Self {
            threshold: outcome.threshold,
            full_match_count: outcome.full_match_count,
            ambiguous_count: outcome.ambiguous_count,
            no_match_count: outcome.no_match_count,
            summary: outcome.report().lines().map(str::to_string).collect(),
            matches,
        }
    }
}

pub fn write_json(outcome: &ThresholdOutcome<'_>, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let report = MatchReport::from_outcome(outcome);
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(output_path, json)?;
    Ok(())
}
