//! 抽出済みレコード（JSON）の読み書き

use crate::error::{AssetMatchError, Result};
use asset_match_common::{Invoice, PairedRecord, TimeDetail};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

fn load_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(AssetMatchError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| AssetMatchError::InvalidRecords(format!("{}: {}", path.display(), e)))
}

fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load_invoices(path: &Path) -> Result<Vec<Invoice>> {
    load_json_array(path)
}

pub fn load_time_details(path: &Path) -> Result<Vec<TimeDetail>> {
    load_json_array(path)
}

pub fn load_pairs(path: &Path) -> Result<Vec<PairedRecord>> {
    load_json_array(path)
}

pub fn save_pairs(path: &Path, pairs: &[PairedRecord]) -> Result<()> {
    save_json(path, pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_pairs() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("pairs.json");

        let pairs = vec![PairedRecord::new(
            Invoice {
                page_num: 2,
                project_name: "Oak Court".to_string(),
                project_num: "P7".to_string(),
                invoice_num: "1001".to_string(),
                am_email: "am@example.com".to_string(),
            },
            TimeDetail {
                pages: vec![5, 6],
                project_num: "P7".to_string(),
            },
        )];

        save_pairs(&path, &pairs).unwrap();
        assert_eq!(load_pairs(&path).unwrap(), pairs);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_invoices(Path::new("/nonexistent/invoices.json"));
        assert!(matches!(result, Err(AssetMatchError::FileNotFound(_))));
    }

    #[test]
    fn test_load_invalid_records() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("time_details.json");
        std::fs::write(&path, r#"[{"pages": "not a list"}]"#).unwrap();

        let result = load_time_details(&path);
        assert!(matches!(result, Err(AssetMatchError::InvalidRecords(_))));
    }
}
