use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::dataset::DatasetConfig;

pub mod dataset;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub dataset: DatasetConfig,
}

impl Config {
    pub fn new() -> Self {
        let mut dataset = DatasetConfig::default();

        if let Ok(url) = env::var("HOVERDICT_DATASET_URL") {
            dataset.url = url;
        }
        if let Ok(dir) = env::var("HOVERDICT_STORAGE_DIR") {
            dataset.storage_dir = PathBuf::from(dir);
        }
        if let Ok(name) = env::var("HOVERDICT_DATASET_FILE") {
            dataset.file_name = name;
        }

        Config { dataset }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
