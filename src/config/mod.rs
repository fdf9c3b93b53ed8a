#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::domain::ports::StoreSettings;
use crate::utils::error::{IngestError, Result};
use crate::utils::validation::{validate_aws_region, validate_table_name, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const TABLE_NAME_VAR: &str = "DYNAMODB_TABLE_NAME";
pub const REGION_VAR: &str = "AWS_REGION";
pub const ENDPOINT_URL_VAR: &str = "DYNAMODB_ENDPOINT_URL";

/// Where the persister writes. Built once by the caller and handed to the
/// store adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub table_name: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl StoreConfig {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            region: None,
            endpoint_url: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; blank optional values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let table_name = lookup(TABLE_NAME_VAR).ok_or_else(|| IngestError::MissingConfigError {
            field: TABLE_NAME_VAR.to_string(),
        })?;
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            table_name,
            region: optional(REGION_VAR),
            endpoint_url: optional(ENDPOINT_URL_VAR),
        })
    }
}

impl StoreSettings for StoreConfig {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        validate_table_name("table_name", &self.table_name)?;

        if let Some(region) = &self.region {
            validate_aws_region("region", region)?;
        }

        if let Some(endpoint_url) = &self.endpoint_url {
            validate_url("endpoint_url", endpoint_url)?;
        }

        tracing::debug!("Store configuration validation passed");
        Ok(())
    }
}
