use crate::core::ObjectStore;
use crate::utils::error::Result;
use std::sync::Arc;

/// Service facade over the object storage backend. Pure delegation;
/// backend errors propagate unchanged.
pub struct StorageGateway {
    store: Arc<dyn ObjectStore>,
}

impl StorageGateway {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    pub async fn list_objects(&self) -> Result<Vec<String>> {
        self.store.list_objects().await
    }

    pub async fn download_object(&self, name: &str) -> Result<Option<Vec<u8>>> {
        self.store.download_object(name).await
    }
}
