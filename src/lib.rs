pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod handlers;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

#[cfg(feature = "lambda")]
pub use adapters::dynamodb::DynamoDbStore;

pub use adapters::{local::LocalStore, memory::MemoryStore};
pub use config::StoreConfig;
pub use core::{engine::IngestEngine, persister::MarketingPersister};
pub use domain::model::{IngestReport, Record, StageResponse};
pub use utils::error::{IngestError, Result};
