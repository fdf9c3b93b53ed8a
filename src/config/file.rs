use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_table_name, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML settings for local runs:
///
/// ```toml
/// [store]
/// table_name = "CustomerMarketing"
/// local_dir = "./output"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub store: StoreSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSection {
    pub table_name: Option<String>,
    pub local_dir: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: FileConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(table_name) = &self.store.table_name {
            validate_table_name("store.table_name", table_name)?;
        }
        if let Some(local_dir) = &self.store.local_dir {
            validate_path("store.local_dir", local_dir)?;
        }
        Ok(())
    }
}
