//! Asset Match Common Library
//!
//! 請求書のプロジェクト名と物件名マスタの照合エンジン。
//! CLIから使われ、I/Oは行わない。

pub mod types;
pub mod error;
pub mod similarity;
pub mod candidates;
pub mod classifier;
pub mod sweep;
pub mod pairing;
pub mod export;

pub use types::{Invoice, TimeDetail, PairedRecord, ReferenceRow, ReferenceTable, Sheet};
pub use error::{Error, Result};
pub use similarity::{SimilarityScorer, IndelRatio, LevenshteinRatio};
pub use candidates::find_candidates;
pub use classifier::{classify, classify_pair, Classification, MatchKind, PairMatch, ThresholdOutcome, AmbiguousStats};
pub use sweep::{search, search_with_progress, SweepConfig, SweepResult, ThresholdSummary};
pub use pairing::{pair_records, Pairing};
