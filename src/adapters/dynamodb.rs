use crate::domain::model::Record;
use crate::domain::ports::{RecordStore, StoreSettings};
use crate::utils::error::{IngestError, Result};
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: DynamoDbClient,
    table_name: String,
}

impl DynamoDbStore {
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// Builds a client from the default AWS provider chain, overriding region
    /// and endpoint when the settings carry them.
    pub async fn connect(settings: &impl StoreSettings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = settings.region() {
            loader = loader.region(Region::new(region.to_string()));
        }
        if let Some(endpoint) = settings.endpoint_url() {
            loader = loader.endpoint_url(endpoint);
        }
        let config = loader.load().await;

        tracing::info!("Using DynamoDB table {}", settings.table_name());
        Self::new(
            DynamoDbClient::new(&config),
            settings.table_name().to_string(),
        )
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl RecordStore for DynamoDbStore {
    async fn put_item(&self, item: &Record) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(item)))
            .send()
            .await
            .map_err(|e| IngestError::StoreError {
                message: format!(
                    "Failed to put item into {}: {}",
                    self.table_name,
                    DisplayErrorContext(&e)
                ),
            })?;
        Ok(())
    }
}

pub fn to_item(record: &Record) -> HashMap<String, AttributeValue> {
    record
        .data
        .iter()
        .map(|(key, value)| (key.clone(), to_attribute_value(value)))
        .collect()
}

pub fn to_attribute_value(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(flag) => AttributeValue::Bool(*flag),
        Value::Number(number) => AttributeValue::N(number.to_string()),
        Value::String(text) => AttributeValue::S(text.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(to_attribute_value).collect()),
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), to_attribute_value(value)))
                .collect(),
        ),
    }
}
