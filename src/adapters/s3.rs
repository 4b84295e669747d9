use crate::domain::ports::ObjectStore;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::Client as S3Client;

#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: S3Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn list_objects(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let resp = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .set_continuation_token(continuation.take())
                .send()
                .await
                .map_err(|e| GatewayError::StorageError(Box::new(e)))?;

            for object in resp.contents() {
                if let Some(key) = object.key() {
                    names.push(key.to_string());
                }
            }

            match resp.next_continuation_token() {
                Some(token) if resp.is_truncated() == Some(true) => {
                    continuation = Some(token.to_string());
                }
                _ => break,
            }
        }

        Ok(names)
    }

    async fn download_object(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(name)
            .send()
            .await;

        match result {
            Ok(resp) => {
                let data = resp
                    .body
                    .collect()
                    .await
                    .map_err(|e| GatewayError::StorageError(Box::new(e)))?;
                Ok(Some(data.into_bytes().to_vec()))
            }
            Err(err) => match err.into_service_error() {
                // A missing key is a normal outcome, not a failure.
                GetObjectError::NoSuchKey(_) => Ok(None),
                other => Err(GatewayError::StorageError(Box::new(other))),
            },
        }
    }
}
