use crate::core::deduplicator::remove_duplicates;
use crate::core::persister::MarketingPersister;
use crate::core::validator::validate_batch;
use crate::domain::model::{payload_items, IngestReport};
use crate::domain::ports::RecordStore;
use crate::utils::error::Result;
use serde_json::Value;

/// Runs validate, dedupe and persist back to back over one payload.
pub struct IngestEngine<S: RecordStore> {
    persister: MarketingPersister<S>,
}

impl<S: RecordStore> IngestEngine<S> {
    pub fn new(persister: MarketingPersister<S>) -> Self {
        Self { persister }
    }

    pub fn persister(&self) -> &MarketingPersister<S> {
        &self.persister
    }

    pub async fn run(&self, payload: Value) -> Result<IngestReport> {
        tracing::info!("Starting ingestion run");

        let candidates = payload_items(payload)?;
        let received = candidates.len();

        let validation = validate_batch(&candidates);
        let valid = validation.valid.len();
        tracing::info!("Validated {} of {} records", valid, received);

        let unique_records = remove_duplicates(validation.valid)?;
        let unique = unique_records.len();
        tracing::info!("Kept {} unique records", unique);

        let summary = self.persister.persist(&unique_records).await?;

        let report = IngestReport {
            received,
            valid,
            unique,
            stored: summary.stored,
        };
        tracing::info!("Ingestion run finished: {:?}", report);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;
    use crate::utils::error::ErrorCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_full_chain() {
        let engine = IngestEngine::new(MarketingPersister::new(MemoryStore::new()));
        let payload = json!([
            {"Name": "A", "Email": "a@x.com", "MarketingOptIn": true, "MarketingInterests": ["sports"]},
            {"Name": "A again", "Email": "a@x.com", "MarketingOptIn": true, "MarketingInterests": []},
            {"Name": "B", "Email": "bad-email", "MarketingOptIn": true, "MarketingInterests": []},
            {"Name": "C", "Email": "c@x.com", "MarketingOptIn": false, "MarketingInterests": []},
            {"Name": "D", "Email": "d@x.com", "MarketingOptIn": true, "MarketingInterests": ["music", "film"]}
        ]);

        let report = engine.run(payload).await.unwrap();

        assert_eq!(
            report,
            IngestReport {
                received: 5,
                valid: 4,
                unique: 3,
                stored: 2
            }
        );
        let stored = engine.persister().store().items().await;
        let names: Vec<_> = stored.iter().map(|r| r.get("Name").unwrap().clone()).collect();
        assert_eq!(names, vec![json!("A"), json!("D")]);
    }

    #[tokio::test]
    async fn test_rejects_non_array_payload() {
        let engine = IngestEngine::new(MarketingPersister::new(MemoryStore::new()));

        let err = engine.run(json!("not records")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert!(engine.persister().store().items().await.is_empty());
    }
}
