use crate::domain::model::Record;
use crate::domain::record::EMAIL;
use crate::utils::error::{IngestError, Result};
use serde_json::Value;
use std::collections::HashSet;

/// Keeps the first record seen for each distinct `Email`, in input order.
///
/// Emails compare by exact value; no case or whitespace folding. A record
/// without `Email` is an error: this stage expects validated input.
pub fn remove_duplicates(records: Vec<Record>) -> Result<Vec<Record>> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(records.len());

    for record in records {
        let email = record
            .get(EMAIL)
            .ok_or_else(|| IngestError::missing_field(EMAIL))?;

        if seen.insert(email_key(email)) {
            unique.push(record);
        } else {
            tracing::debug!("Dropping duplicate record for {}", email);
        }
    }

    Ok(unique)
}

// JSON text keeps "1" and 1 apart.
fn email_key(email: &Value) -> String {
    email.to_string()
}
