//! 文字列類似度スコア
//!
//! 0〜100の正規化スコアを返す。大文字小文字・空白は区別する（正規化しない）。

/// 類似度スコアラー
pub trait SimilarityScorer: Send + Sync {
    /// 0〜100のスコア（対称）
    fn score(&self, a: &str, b: &str) -> u8;
}

/// 挿入・削除ベースの比率（置換コスト2のレーベンシュタイン）
///
/// `100 * (lenA + lenB - distance) / (lenA + lenB)` を偶数丸め（.5 は偶数側）。
/// 一般的なファジーマッチの "ratio" と同じ値になる。
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelRatio;

impl SimilarityScorer for IndelRatio {
    fn score(&self, a: &str, b: &str) -> u8 {
        let len_sum = a.chars().count() + b.chars().count();
        if len_sum == 0 {
            return 100;
        }

        let distance = indel_distance(a, b);
        to_percent((len_sum - distance) as f64 / len_sum as f64)
    }
}

/// 正規化レーベンシュタイン比率 `100 * (1 - distance / maxLen)`
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinRatio;

impl SimilarityScorer for LevenshteinRatio {
    fn score(&self, a: &str, b: &str) -> u8 {
        to_percent(strsim::normalized_levenshtein(a, b))
    }
}

/// 0〜100の整数に丸める（.5 は偶数側）
fn to_percent(ratio: f64) -> u8 {
    (ratio * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

/// 置換コスト2の編集距離（= 挿入・削除のみの距離）
fn indel_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b_len {
        matrix[0][j] = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 2 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}
