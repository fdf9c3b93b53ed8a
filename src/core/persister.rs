use crate::domain::model::{PersistSummary, Record};
use crate::domain::ports::RecordStore;
use crate::domain::record::MARKETING_OPT_IN;
use crate::utils::error::{IngestError, Result};
use serde_json::Value;

/// Writes opted-in records through an injected [`RecordStore`].
pub struct MarketingPersister<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> MarketingPersister<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stores every record whose `MarketingOptIn` is truthy, one write at a
    /// time, in input order. Duplicates are written again.
    ///
    /// The first failure aborts the run. Items written before it stay in the
    /// store and are not reported.
    pub async fn persist(&self, records: &[Record]) -> Result<PersistSummary> {
        let mut stored = 0;

        for record in records {
            let opt_in = record
                .get(MARKETING_OPT_IN)
                .ok_or_else(|| IngestError::missing_field(MARKETING_OPT_IN))?;

            if is_truthy(opt_in) {
                self.store.put_item(record).await?;
                stored += 1;
            }
        }

        tracing::info!(
            "Stored {} of {} records for marketing",
            stored,
            records.len()
        );
        Ok(PersistSummary { stored })
    }
}

/// Loose truthiness: `false`, `null`, zero, and empty strings, arrays or
/// objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
