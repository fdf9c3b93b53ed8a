use crate::domain::model::Record;
use crate::domain::ports::RecordStore;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Appends items as JSON lines to `<base_path>/<table_name>.jsonl`.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(base_path: impl AsRef<Path>, table_name: &str) -> Self {
        Self {
            path: base_path.as_ref().join(format!("{}.jsonl", table_name)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_all(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let mut items = Vec::new();
        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            items.push(serde_json::from_str(line)?);
        }
        Ok(items)
    }
}

impl RecordStore for LocalStore {
    async fn put_item(&self, item: &Record) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut line = serde_json::to_string(item)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!("Wrote item to {}", self.path.display());
        Ok(())
    }
}
