use crate::domain::model::Record;
use crate::domain::ports::RecordStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-process store. Clones share the same items.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn items(&self) -> Vec<Record> {
        self.items.lock().await.clone()
    }
}

impl RecordStore for MemoryStore {
    async fn put_item(&self, item: &Record) -> Result<()> {
        self.items.lock().await.push(item.clone());
        Ok(())
    }
}
