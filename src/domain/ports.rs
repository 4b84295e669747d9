use crate::utils::error::Result;
use async_trait::async_trait;

/// Object storage backend. Listing reflects the backend at call time;
/// a missing object is a value, not an error.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn list_objects(&self) -> Result<Vec<String>>;
    async fn download_object(&self, name: &str) -> Result<Option<Vec<u8>>>;
}
