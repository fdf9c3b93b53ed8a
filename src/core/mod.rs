pub mod deduplicator;
pub mod engine;
pub mod persister;
pub mod validator;

pub use crate::domain::model::{IngestReport, PersistSummary, Record, StageResponse};
pub use crate::domain::ports::RecordStore;
pub use crate::utils::error::Result;
