use crate::domain::model::Record;
use serde_json::{Map, Value};
use thiserror::Error;

pub const NAME: &str = "Name";
pub const EMAIL: &str = "Email";
pub const MARKETING_OPT_IN: &str = "MarketingOptIn";
pub const MARKETING_INTERESTS: &str = "MarketingInterests";

/// Presence is checked in this order; the first missing one is reported.
pub const REQUIRED_FIELDS: [&str; 4] = [NAME, EMAIL, MARKETING_OPT_IN, MARKETING_INTERESTS];

/// Why a candidate record was not accepted. The display text is the reason
/// written to the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordRejection {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field 'Name' must be a string")]
    NameNotString,

    #[error("Field 'Email' must be a valid email address")]
    InvalidEmail,

    #[error("Field 'MarketingOptIn' must be a boolean")]
    OptInNotBoolean,

    #[error("Field 'MarketingInterests' must be an array")]
    InterestsNotArray,

    #[error("Items in 'MarketingInterests' must be strings")]
    InterestNotString,
}

/// Strongly typed view of a record that passed the schema contract.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub name: String,
    pub email: String,
    pub marketing_opt_in: bool,
    pub marketing_interests: Vec<String>,
    /// Attributes outside the contract, carried through untouched.
    pub extra: Map<String, Value>,
}

impl CustomerRecord {
    /// Parses an untrusted JSON value, stopping at the first rule it breaks.
    ///
    /// A value that is not an object has none of the required keys, so it is
    /// reported as missing `Name`.
    pub fn parse(candidate: &Value) -> Result<Self, RecordRejection> {
        let Value::Object(fields) = candidate else {
            return Err(RecordRejection::MissingField(NAME));
        };

        if let Some(missing) = REQUIRED_FIELDS
            .iter()
            .find(|field| !fields.contains_key(**field))
        {
            return Err(RecordRejection::MissingField(*missing));
        }

        let name = match &fields[NAME] {
            Value::String(name) => name.clone(),
            _ => return Err(RecordRejection::NameNotString),
        };

        let email = match &fields[EMAIL] {
            Value::String(email) if email.contains('@') => email.clone(),
            _ => return Err(RecordRejection::InvalidEmail),
        };

        let marketing_opt_in = fields[MARKETING_OPT_IN]
            .as_bool()
            .ok_or(RecordRejection::OptInNotBoolean)?;

        let marketing_interests = fields[MARKETING_INTERESTS]
            .as_array()
            .ok_or(RecordRejection::InterestsNotArray)?
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or(RecordRejection::InterestNotString)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let extra = fields
            .iter()
            .filter(|(key, _)| !REQUIRED_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            name,
            email,
            marketing_opt_in,
            marketing_interests,
            extra,
        })
    }

    pub fn into_record(self) -> Record {
        let mut data = self.extra;
        data.insert(NAME.to_string(), Value::String(self.name));
        data.insert(EMAIL.to_string(), Value::String(self.email));
        data.insert(
            MARKETING_OPT_IN.to_string(),
            Value::Bool(self.marketing_opt_in),
        );
        data.insert(
            MARKETING_INTERESTS.to_string(),
            Value::Array(
                self.marketing_interests
                    .into_iter()
                    .map(Value::String)
                    .collect(),
            ),
        );
        Record::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "Name": "A",
            "Email": "a@x.com",
            "MarketingOptIn": true,
            "MarketingInterests": ["sports"]
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut candidate = valid();
        candidate[field] = value;
        candidate
    }

    #[test]
    fn test_parse_valid_record() {
        let parsed = CustomerRecord::parse(&valid()).unwrap();
        assert_eq!(parsed.name, "A");
        assert_eq!(parsed.email, "a@x.com");
        assert!(parsed.marketing_opt_in);
        assert_eq!(parsed.marketing_interests, vec!["sports".to_string()]);
        assert!(parsed.extra.is_empty());
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let err = CustomerRecord::parse(&json!({"Email": 5})).unwrap_err();
        assert_eq!(err, RecordRejection::MissingField("Name"));

        let mut candidate = valid();
        candidate.as_object_mut().unwrap().remove("MarketingInterests");
        let err = CustomerRecord::parse(&candidate).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: MarketingInterests");
    }

    #[test]
    fn test_non_object_is_missing_name() {
        assert_eq!(
            CustomerRecord::parse(&json!(["Name"])).unwrap_err(),
            RecordRejection::MissingField("Name")
        );
    }

    #[test]
    fn test_type_rules() {
        assert_eq!(
            CustomerRecord::parse(&with("Name", json!(1))).unwrap_err(),
            RecordRejection::NameNotString
        );
        // No emptiness check on Name.
        assert!(CustomerRecord::parse(&with("Name", json!(""))).is_ok());
        assert_eq!(
            CustomerRecord::parse(&with("Email", json!("bad-email"))).unwrap_err(),
            RecordRejection::InvalidEmail
        );
        assert_eq!(
            CustomerRecord::parse(&with("Email", json!(["a@x.com"]))).unwrap_err(),
            RecordRejection::InvalidEmail
        );
        assert_eq!(
            CustomerRecord::parse(&with("MarketingOptIn", json!("true"))).unwrap_err(),
            RecordRejection::OptInNotBoolean
        );
        assert_eq!(
            CustomerRecord::parse(&with("MarketingOptIn", json!(1))).unwrap_err(),
            RecordRejection::OptInNotBoolean
        );
    }

    #[test]
    fn test_interest_reasons_are_distinct() {
        let err = CustomerRecord::parse(&with("MarketingInterests", json!("sports"))).unwrap_err();
        assert_eq!(err.to_string(), "Field 'MarketingInterests' must be an array");

        let err =
            CustomerRecord::parse(&with("MarketingInterests", json!(["sports", 3]))).unwrap_err();
        assert_eq!(err.to_string(), "Items in 'MarketingInterests' must be strings");

        assert!(CustomerRecord::parse(&with("MarketingInterests", json!([]))).is_ok());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let candidate = json!({
            "Name": 1,
            "Email": "bad",
            "MarketingOptIn": "no",
            "MarketingInterests": {}
        });
        assert_eq!(
            CustomerRecord::parse(&candidate).unwrap_err(),
            RecordRejection::NameNotString
        );
    }

    #[test]
    fn test_into_record_keeps_extra_attributes() {
        let candidate = with("CustomerId", json!(42));
        let record = CustomerRecord::parse(&candidate).unwrap().into_record();
        assert_eq!(serde_json::to_value(&record).unwrap(), candidate);
    }
}
