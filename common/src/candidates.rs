//! 物件名マスタから候補行を検索する

use crate::similarity::SimilarityScorer;
use crate::types::{ReferenceRow, ReferenceTable};

/// 閾値以上のスコアを持つマスタ行をすべて返す
///
/// シート順・行順を保持し、スコアでの並べ替えは行わない。
/// 物件名セルが無い行は対象外。
pub fn find_candidates<'a>(
    table: &'a ReferenceTable,
    query: &str,
    threshold: u8,
    scorer: &dyn SimilarityScorer,
) -> Vec<&'a ReferenceRow> {
    table
        .sheets
        .iter()
        .flat_map(|sheet| sheet.data_rows())
        .filter(|row| {
            row.name()
                .map(|name| scorer.score(query, name) >= threshold)
                .unwrap_or(false)
        })
        .collect()
}
