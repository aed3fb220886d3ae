use crate::error::{AssetMatchError, Result};
use asset_match_common::SweepConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub threshold_min: u8,
    pub threshold_max: u8,
    pub threshold_step: u8,
    pub worker_count: usize,
    /// 物件名マスタ（asset assignments）のパス
    pub asset_assignments: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let sweep = SweepConfig::default();
        Self {
            threshold_min: sweep.threshold_min,
            threshold_max: sweep.threshold_max,
            threshold_step: sweep.threshold_step,
            worker_count: sweep.worker_count,
            asset_assignments: PathBuf::from("asset_assignments.xlsx"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AssetMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("asset-match").join("config.json"))
    }

    /// スイープ設定（CLIの指定があれば優先）
    pub fn sweep_config(
        &self,
        min: Option<u8>,
        max: Option<u8>,
        step: Option<u8>,
        workers: Option<usize>,
    ) -> Result<SweepConfig> {
        let sweep = SweepConfig {
            threshold_min: min.unwrap_or(self.threshold_min),
            threshold_max: max.unwrap_or(self.threshold_max),
            threshold_step: step.unwrap_or(self.threshold_step),
            worker_count: workers.unwrap_or(self.worker_count),
        };
        sweep.validate()?;
        Ok(sweep)
    }
}
