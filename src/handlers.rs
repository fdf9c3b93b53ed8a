//! Event-payload entry points for the three functions, independent of the
//! Lambda runtime so they can be driven from tests and the CLI.

use crate::core::deduplicator::remove_duplicates;
use crate::core::persister::MarketingPersister;
use crate::core::validator::validate_records;
use crate::domain::model::{payload_items, PersistSummary, Record, StageResponse};
use crate::domain::ports::RecordStore;
use crate::utils::error::Result;
use serde_json::Value;

/// Validator: the valid records, the invalid-input sentinel, or a 500.
pub fn handle_validate(payload: Value) -> StageResponse {
    match validate_records(payload) {
        Ok(records) => StageResponse::Records(records),
        Err(e) => {
            tracing::error!("Validation failed: {}", e);
            e.into_response()
        }
    }
}

/// Validator over an undecoded body. A body that is not JSON is invalid input.
pub fn handle_validate_str(body: &str) -> StageResponse {
    match serde_json::from_str(body) {
        Ok(payload) => handle_validate(payload),
        Err(e) => {
            tracing::error!("Could not decode records: {}", e);
            StageResponse::Invalid
        }
    }
}

/// Deduplicator: errors are returned to the caller untouched.
pub fn handle_dedupe(payload: Value) -> Result<Vec<Record>> {
    let records = parse_records(payload)?;
    remove_duplicates(records)
}

/// Persister: a 200 with the stored count, or a 500 carrying the error text.
pub async fn handle_persist<S: RecordStore>(
    persister: &MarketingPersister<S>,
    payload: Value,
) -> StageResponse {
    match persist_payload(persister, payload).await {
        Ok(summary) => summary.into_response(),
        Err(e) => {
            tracing::error!("Persisting records failed: {}", e);
            StageResponse::failure(&e)
        }
    }
}

async fn persist_payload<S: RecordStore>(
    persister: &MarketingPersister<S>,
    payload: Value,
) -> Result<PersistSummary> {
    let records = parse_records(payload)?;
    persister.persist(&records).await
}

fn parse_records(payload: Value) -> Result<Vec<Record>> {
    payload_items(payload)?
        .into_iter()
        .map(Record::try_from)
        .collect()
}
