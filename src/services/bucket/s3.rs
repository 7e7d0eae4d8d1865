//! S3 object store using OpenDAL.
//!
//! Works against Amazon S3 and S3-compatible services (MinIO, Cloudflare R2)
//! when a custom endpoint is configured.

use async_trait::async_trait;
use futures::StreamExt;
use opendal::layers::LoggingLayer;
use opendal::services::S3;
use opendal::{EntryMode, ErrorKind, Operator};
use std::sync::Arc;

use super::traits::{BoxedObjectStore, ObjectStore};
use super::types::{ListPage, ListRequest, StorageConfig, StorageError};

/// Page size used when a request does not set one, matching S3's own default.
const DEFAULT_MAX_KEYS: usize = 1000;

/// S3 object store.
///
/// Holds one OpenDAL operator for its whole lifetime. Continuation tokens are
/// the last key of the previous page and are passed back as `start_after`.
pub struct S3Store {
    operator: Operator,
}

impl S3Store {
    /// Create a new S3 store from the configuration.
    ///
    /// No request is sent; credentials are only checked by the first call.
    pub fn new(config: &StorageConfig) -> Result<Self, StorageError> {
        config.validate()?;

        let mut builder = S3::default().bucket(&config.bucket).region(&config.region);

        // Custom endpoint for S3-compatible services
        if let Some(endpoint) = config.endpoint.as_deref() {
            if !endpoint.is_empty() {
                builder = builder.endpoint(endpoint);
            }
        }

        if let Some(key_id) = config.access_key_id.as_deref() {
            builder = builder.access_key_id(key_id);
            if let Some(secret) = config.secret_access_key.as_deref() {
                builder = builder.secret_access_key(secret);
            }
        }

        let operator = Operator::new(builder)
            .map_err(|e| StorageError::Config(format!("Failed to build S3 client: {}", e)))?
            .layer(LoggingLayer::default())
            .finish();

        Ok(Self { operator })
    }

    #[cfg(test)]
    fn from_operator(operator: Operator) -> Self {
        Self { operator }
    }

    /// Create a shared S3 store.
    pub fn shared(config: &StorageConfig) -> Result<BoxedObjectStore, StorageError> {
        Ok(Arc::new(Self::new(config)?))
    }
}

/// Map an OpenDAL error for `key` into a storage error.
fn map_error(key: &str, err: opendal::Error) -> StorageError {
    match err.kind() {
        ErrorKind::NotFound => StorageError::NotFound {
            key: key.to_string(),
        },
        ErrorKind::PermissionDenied => StorageError::Unauthorized(err.to_string()),
        _ => StorageError::Transport(err.into()),
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn list_page(&self, request: &ListRequest) -> Result<ListPage, StorageError> {
        let prefix = request.prefix.as_deref().unwrap_or("");
        // OpenDAL only understands "/" as a delimiter.
        let delimited = request.delimiter.is_some();
        let max_keys = request.max_keys.unwrap_or(DEFAULT_MAX_KEYS).max(1);

        let mut lister = self.operator.lister_with(prefix).recursive(!delimited);
        if let Some(token) = request.continuation_token.as_deref() {
            lister = lister.start_after(token);
        }
        let mut lister = lister.await.map_err(|e| map_error(prefix, e))?;

        let mut page = ListPage::default();
        let mut last_key: Option<String> = None;
        let mut taken = 0;

        while let Some(entry) = lister.next().await {
            let entry = entry.map_err(|e| map_error(prefix, e))?;
            let path = entry.path();

            // Skip the prefix itself if it's a directory marker
            if path == prefix {
                continue;
            }

            if taken == max_keys {
                page.next_continuation_token = last_key;
                break;
            }

            if delimited && entry.metadata().mode() == EntryMode::DIR {
                page.common_prefixes.push(path.to_string());
            } else {
                page.keys.push(path.to_string());
            }
            last_key = Some(path.to_string());
            taken += 1;
        }

        Ok(page)
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        // Directory paths never name an object.
        if key.is_empty() || key.ends_with('/') {
            return Ok(false);
        }
        match self.operator.stat(key).await {
            Ok(meta) => Ok(meta.mode() == EntryMode::FILE),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(map_error(key, e)),
        }
    }

    async fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let data = self.operator.read(key).await.map_err(|e| map_error(key, e))?;
        Ok(data.to_vec())
    }

    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        let mut write = self.operator.write_with(key, body);
        if let Some(content_type) = content_type {
            write = write.content_type(content_type);
        }
        write.await.map_err(|e| map_error(key, e))?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.operator.delete(key).await.map_err(|e| map_error(key, e))
    }
}
