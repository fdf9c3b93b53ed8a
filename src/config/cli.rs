use crate::config::file::FileConfig;
use crate::config::TABLE_NAME_VAR;
use crate::utils::error::{IngestError, Result};
use crate::utils::validation::{validate_path, validate_table_name};
use clap::{Args, Parser, Subcommand};

pub const DEFAULT_STORE_DIR: &str = "./output";

#[derive(Debug, Clone, Parser)]
#[command(name = "ingest")]
#[command(about = "Validate, deduplicate and store marketing opt-in records")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Drop records that break the schema contract
    Validate(StageArgs),
    /// Keep the first record for each email
    Dedupe(StageArgs),
    /// Store opted-in records in the local table
    Persist(PersistArgs),
    /// Validate, dedupe and persist in one go
    Run(PersistArgs),
}

#[derive(Debug, Clone, Args)]
pub struct StageArgs {
    #[arg(long, default_value = "-", help = "JSON array of records, '-' for stdin")]
    pub input: String,

    #[arg(long, help = "Write the result here instead of stdout")]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct PersistArgs {
    #[command(flatten)]
    pub io: StageArgs,

    #[arg(long, help = "TOML file with a [store] section")]
    pub config: Option<String>,

    #[arg(long, help = "Table name, overrides the config file and DYNAMODB_TABLE_NAME")]
    pub table_name: Option<String>,

    #[arg(long, help = "Directory holding the local table files")]
    pub store_dir: Option<String>,
}

/// Resolved location of the local table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTarget {
    pub table_name: String,
    pub store_dir: String,
}

impl PersistArgs {
    /// Flags win over the config file; the table name falls back to the
    /// environment last.
    pub fn resolve_target(&self) -> Result<LocalTarget> {
        self.resolve_target_with(|key| std::env::var(key).ok())
    }

    pub fn resolve_target_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<LocalTarget> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };

        let table_name = self
            .table_name
            .clone()
            .or(file.store.table_name)
            .or_else(|| lookup(TABLE_NAME_VAR))
            .ok_or_else(|| IngestError::MissingConfigError {
                field: "table_name".to_string(),
            })?;
        let store_dir = self
            .store_dir
            .clone()
            .or(file.store.local_dir)
            .unwrap_or_else(|| DEFAULT_STORE_DIR.to_string());

        validate_table_name("table_name", &table_name)?;
        validate_path("store_dir", &store_dir)?;

        Ok(LocalTarget {
            table_name,
            store_dir,
        })
    }
}
