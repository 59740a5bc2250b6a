use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;

use hoverdict_config::dataset::DatasetConfig;
use hoverdict_core::editor::StatusIndicator;

/// One-shot dataset downloader. Best effort: no retry, no resume; a failure
/// propagates to the caller and activation fails for the session.
pub struct DatasetFetcher {
    client: reqwest::Client,
}

impl DatasetFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Ensure the dataset is cached locally, downloading it on first use.
    /// Returns the cache path; an existing file is reused untouched.
    pub async fn ensure_dataset(
        &self,
        dataset: &DatasetConfig,
        status: &dyn StatusIndicator,
    ) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&dataset.storage_dir)
            .await
            .with_context(|| {
                format!(
                    "Failed to create storage dir {}",
                    dataset.storage_dir.display()
                )
            })?;

        let path = dataset.dataset_path();
        if path.exists() {
            tracing::debug!("Dataset already cached at {}", path.display());
            return Ok(path);
        }

        self.download(&dataset.url, &path, &dataset.label, status)
            .await?;
        tracing::info!("Dataset downloaded to {}", path.display());
        Ok(path)
    }

    /// Stream `url` into `dest`, surfacing progress on the status indicator.
    pub async fn download(
        &self,
        url: &str,
        dest: &Path,
        name: &str,
        status: &dyn StatusIndicator,
    ) -> Result<()> {
        status.show(&format!("Downloading {name}..."));

        let mut resp = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to request dataset")?;
        if !resp.status().is_success() {
            status.hide();
            anyhow::bail!("Download failed: {}", resp.status());
        }

        let mut file = tokio::fs::File::create(dest)
            .await
            .with_context(|| format!("Failed to create {}", dest.display()))?;
        while let Some(chunk) = resp.chunk().await.context("Failed to read dataset body")? {
            file.write_all(&chunk)
                .await
                .context("Failed to write dataset chunk")?;
        }
        file.flush().await.context("Failed to flush dataset file")?;

        status.hide();
        Ok(())
    }
}

impl Default for DatasetFetcher {
    fn default() -> Self {
        Self::new()
    }
}
