use crate::domain::model::{payload_items, Record};
use crate::domain::record::{CustomerRecord, RecordRejection};
use crate::utils::error::Result;
use serde_json::Value;

/// Accepted records plus the reason each rejected candidate was dropped,
/// keyed by its position in the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub valid: Vec<Record>,
    pub rejected: Vec<(usize, RecordRejection)>,
}

impl ValidationReport {
    pub fn total(&self) -> usize {
        self.valid.len() + self.rejected.len()
    }
}

/// Applies the schema contract to every candidate, keeping input order.
/// Rejections are logged at error level and never abort the batch.
pub fn validate_batch(candidates: &[Value]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (index, candidate) in candidates.iter().enumerate() {
        match CustomerRecord::parse(candidate) {
            Ok(customer) => report.valid.push(customer.into_record()),
            Err(reason) => {
                tracing::error!(index, "Invalid data: {}", reason);
                report.rejected.push((index, reason));
            }
        }
    }

    tracing::debug!(
        "Validated {} records: {} accepted, {} rejected",
        report.total(),
        report.valid.len(),
        report.rejected.len()
    );

    report
}

/// Validates a raw event payload. A payload that is not an array is
/// reported as invalid input.
pub fn validate_records(payload: Value) -> Result<Vec<Record>> {
    let candidates = payload_items(payload)?;
    Ok(validate_batch(&candidates).valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::REQUIRED_FIELDS;
    use crate::utils::error::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_rejects_email_without_at_sign() {
        let payload = json!([
            {"Name": "A", "Email": "a@x.com", "MarketingOptIn": true, "MarketingInterests": ["sports"]},
            {"Name": "B", "Email": "bad-email", "MarketingOptIn": true, "MarketingInterests": []}
        ]);

        let records = validate_records(payload).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Name"), Some(&json!("A")));
    }

    #[test]
    fn test_missing_interests_reason() {
        let candidates = vec![json!({"Name": "A", "Email": "a@x.com", "MarketingOptIn": false})];

        let report = validate_batch(&candidates);

        assert!(report.valid.is_empty());
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].0, 0);
        assert_eq!(
            report.rejected[0].1.to_string(),
            "Missing required field: MarketingInterests"
        );
    }

    #[test]
    fn test_output_preserves_order_and_only_holds_valid_records() {
        let candidates = vec![
            json!({"Name": "C", "Email": "c@x.com", "MarketingOptIn": false, "MarketingInterests": []}),
            json!({"Name": "bad", "Email": "b@x.com", "MarketingOptIn": "yes", "MarketingInterests": []}),
            json!(42),
            json!({"Name": "A", "Email": "a@x.com", "MarketingOptIn": true, "MarketingInterests": ["x", "y"], "Extra": 1}),
            json!({"Name": "D", "Email": "d@x.com", "MarketingOptIn": true, "MarketingInterests": [1]}),
        ];

        let report = validate_batch(&candidates);

        assert!(report.valid.len() <= candidates.len());
        assert_eq!(report.total(), candidates.len());
        let names: Vec<_> = report.valid.iter().map(|r| r.get("Name").unwrap().clone()).collect();
        assert_eq!(names, vec![json!("C"), json!("A")]);
        for record in &report.valid {
            let value = serde_json::to_value(record).unwrap();
            assert!(CustomerRecord::parse(&value).is_ok());
            for field in REQUIRED_FIELDS {
                assert!(record.get(field).is_some());
            }
        }
        assert_eq!(report.valid[1].get("Extra"), Some(&json!(1)));

        let rejected_at: Vec<usize> = report.rejected.iter().map(|(i, _)| *i).collect();
        assert_eq!(rejected_at, vec![1, 2, 4]);
    }

    #[test]
    fn test_non_array_payload_is_invalid_input() {
        let err = validate_records(json!({"Name": "A"})).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn test_empty_payload() {
        assert!(validate_records(json!([])).unwrap().is_empty());
    }
}
