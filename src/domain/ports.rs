use crate::domain::model::Record;
use crate::utils::error::Result;

/// Key-value store receiving persisted records. One call writes one item;
/// the table's own key schema decides whether a repeat overwrites.
pub trait RecordStore: Send + Sync {
    fn put_item(&self, item: &Record) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait StoreSettings: Send + Sync {
    fn table_name(&self) -> &str;
    fn region(&self) -> Option<&str>;
    fn endpoint_url(&self) -> Option<&str>;
}
