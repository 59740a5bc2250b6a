use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "https://raw.githubusercontent.com/skywind3000/ECDICT/master/ecdict.csv".to_string()
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".hoverdict")
}

fn default_file_name() -> String {
    "ecdict.csv".to_string()
}

fn default_label() -> String {
    "ECDICT".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DatasetConfig {
    #[serde(default = "default_url")]
    pub url: String,
    /// Local cache directory; the dataset persists across runs and is never
    /// re-downloaded once present.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Human-readable dataset name for the download status line.
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            storage_dir: default_storage_dir(),
            file_name: default_file_name(),
            label: default_label(),
        }
    }
}

impl DatasetConfig {
    pub fn dataset_path(&self) -> PathBuf {
        self.storage_dir.join(&self.file_name)
    }
}
