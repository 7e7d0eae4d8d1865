//! Object store trait.
//!
//! This module defines the seam between the album storage client and the
//! service actually holding the objects, so the client can run against S3
//! in the application and against an in-memory store in tests.

use async_trait::async_trait;
use std::sync::Arc;

use super::types::{ListPage, ListRequest, StorageError};

/// Core trait for object stores.
///
/// Every call is a single request against the remote service; implementations
/// must not cache results between calls.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch one page of a listing.
    ///
    /// When `request.delimiter` is set, keys below the first delimiter after
    /// the prefix are folded into `common_prefixes`. Pass the previous page's
    /// `next_continuation_token` to continue a listing.
    async fn list_page(&self, request: &ListRequest) -> Result<ListPage, StorageError>;

    /// Check if an object exists.
    async fn exists(&self, key: &str) -> Result<bool, StorageError>;

    /// Read the whole body of an object.
    async fn read(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Read the whole body of an object as UTF-8 text.
    async fn read_to_string(&self, key: &str) -> Result<String, StorageError> {
        let body = self.read(key).await?;
        String::from_utf8(body).map_err(|_| StorageError::InvalidText {
            key: key.to_string(),
        })
    }

    /// Create or overwrite an object.
    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), StorageError>;

    /// Delete an object.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// A shared object store for dynamic dispatch.
pub type BoxedObjectStore = Arc<dyn ObjectStore>;
