//! Album storage client.
//!
//! `AlbumStorage` is the only component talking to the photo bucket. Every
//! operation comes in two flavours:
//!
//! - `try_*` returns a `Result` so callers can surface or retry failures.
//! - The plain method logs the failure and returns an empty value (empty
//!   list, `None`, or nothing), so UI code never has to handle errors.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::keys::{build_json_key, build_key, build_public_url, folder_prefix};
use super::s3::S3Store;
use super::traits::BoxedObjectStore;
use super::types::{ListRequest, StorageConfig, StorageError, UploadFile};

/// Page size used by `list_files` callers that have no preference.
pub const DEFAULT_PAGE_SIZE: usize = 100;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Client for the photo bucket.
///
/// The bucket name and the store are fixed at construction; nothing is
/// cached between calls.
pub struct AlbumStorage {
    bucket: String,
    store: BoxedObjectStore,
}

impl AlbumStorage {
    /// Create a client for `bucket` over an existing store.
    pub fn new(bucket: impl Into<String>, store: BoxedObjectStore) -> Self {
        Self {
            bucket: bucket.into(),
            store,
        }
    }

    /// Create a client backed by S3.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let store = S3Store::shared(config)?;
        Ok(Self::new(config.bucket.clone(), store))
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Public URL of `key` in this bucket.
    pub fn public_url(&self, key: &str) -> String {
        build_public_url(&self.bucket, key)
    }

    // ========================================================================
    // Typed operations
    // ========================================================================

    /// List the top-level folders (common prefixes such as `"summer/"`).
    pub async fn try_list_folders(&self) -> Result<Vec<String>, StorageError> {
        let request = ListRequest::new().with_delimiter("/");
        let page = self.store.list_page(&request).await?;
        Ok(page.common_prefixes)
    }

    /// List the public URLs of every object in `folder` (or the whole bucket).
    ///
    /// Pages of `max_keys` are requested one after another until the store
    /// stops returning a continuation token.
    pub async fn try_list_files(
        &self,
        folder: Option<&str>,
        max_keys: usize,
    ) -> Result<Vec<String>, StorageError> {
        let mut urls = Vec::new();
        self.collect_files(folder, max_keys, &mut urls).await?;
        Ok(urls)
    }

    async fn collect_files(
        &self,
        folder: Option<&str>,
        max_keys: usize,
        urls: &mut Vec<String>,
    ) -> Result<(), StorageError> {
        let mut request = ListRequest::new().with_max_keys(max_keys);
        if let Some(prefix) = folder_prefix(folder) {
            request = request.with_prefix(prefix);
        }

        loop {
            let page = self.store.list_page(&request).await?;
            urls.extend(page.keys.iter().map(|key| self.public_url(key)));

            match page.next_continuation_token {
                Some(token) if request.continuation_token.as_deref() == Some(token.as_str()) => {
                    return Err(StorageError::Transport(anyhow::anyhow!(
                        "listing did not advance past continuation token {}",
                        token
                    )));
                }
                Some(token) => request = request.with_continuation_token(Some(token)),
                None => return Ok(()),
            }
        }
    }

    /// Public URL of `name` in `folder`, or `None` if there is no such object.
    pub async fn try_get_file(
        &self,
        name: &str,
        folder: Option<&str>,
    ) -> Result<Option<String>, StorageError> {
        let key = build_key(folder, name);
        if self.store.exists(&key).await? {
            Ok(Some(self.public_url(&key)))
        } else {
            Ok(None)
        }
    }

    /// Read and parse the JSON object `name` in `folder`.
    ///
    /// `name` is the full file name, extension included.
    pub async fn try_get_file_json(
        &self,
        name: &str,
        folder: Option<&str>,
    ) -> Result<serde_json::Value, StorageError> {
        self.get_json_as(name, folder).await
    }

    /// Read the JSON object `name` in `folder` into `T`.
    pub async fn get_json_as<T: DeserializeOwned>(
        &self,
        name: &str,
        folder: Option<&str>,
    ) -> Result<T, StorageError> {
        let key = build_key(folder, name);
        let text = self.store.read_to_string(&key).await?;
        serde_json::from_str(&text).map_err(|source| StorageError::MalformedJson { key, source })
    }

    /// Upload `file` to `{folder}/{file.name}`, overwriting any existing object.
    pub async fn try_upload_file(&self, file: &UploadFile, folder: &str) -> Result<(), StorageError> {
        let key = build_key(Some(folder), &file.name);
        self.store
            .put(&key, file.content.to_vec(), file.content_type.as_deref())
            .await
    }

    /// Serialize `data` to `{folder}/{name}.json` (or `{name}.json`).
    pub async fn try_upload_json_file<T: Serialize + ?Sized>(
        &self,
        name: &str,
        data: &T,
        folder: Option<&str>,
    ) -> Result<(), StorageError> {
        let key = build_json_key(folder, name);
        let body = serde_json::to_vec(data).map_err(|source| StorageError::EncodeJson {
            key: key.clone(),
            source,
        })?;
        self.store.put(&key, body, Some(JSON_CONTENT_TYPE)).await
    }

    /// Delete `{folder}/{name}`.
    pub async fn try_delete_file(&self, folder: &str, name: &str) -> Result<(), StorageError> {
        let key = build_key(Some(folder), name);
        self.store.delete(&key).await
    }

    // ========================================================================
    // Degraded operations (log and return an empty value)
    // ========================================================================

    pub async fn list_folders(&self) -> Vec<String> {
        self.try_list_folders().await.unwrap_or_else(|e| {
            tracing::error!("Error listing folders: {}", e);
            Vec::new()
        })
    }

    /// Like `try_list_files`, but keeps the URLs collected before a failure.
    pub async fn list_files(&self, folder: Option<&str>, max_keys: usize) -> Vec<String> {
        let mut urls = Vec::new();
        if let Err(e) = self.collect_files(folder, max_keys, &mut urls).await {
            tracing::error!("Error listing files: {}", e);
        }
        urls
    }

    pub async fn get_file(&self, name: &str, folder: Option<&str>) -> Option<String> {
        match self.try_get_file(name, folder).await {
            Ok(Some(url)) => Some(url),
            Ok(None) => {
                tracing::warn!("File not found: {}", build_key(folder, name));
                None
            }
            Err(e) => {
                tracing::error!("Error getting file: {}", e);
                None
            }
        }
    }

    pub async fn get_file_json(&self, name: &str, folder: Option<&str>) -> Option<serde_json::Value> {
        self.try_get_file_json(name, folder)
            .await
            .inspect_err(|e| {
                if e.is_not_found() {
                    tracing::warn!("JSON file not found: {}", build_key(folder, name));
                } else {
                    tracing::error!("Error reading JSON file: {}", e);
                }
            })
            .ok()
    }

    pub async fn upload_file(&self, file: &UploadFile, folder: &str) {
        match self.try_upload_file(file, folder).await {
            Ok(()) => tracing::info!("File uploaded successfully: {}/{}", folder, file.name),
            Err(e) => tracing::error!("Error uploading file: {}", e),
        }
    }

    pub async fn upload_json_file<T: Serialize + ?Sized>(
        &self,
        name: &str,
        data: &T,
        folder: Option<&str>,
    ) {
        match self.try_upload_json_file(name, data, folder).await {
            Ok(()) => tracing::info!("File uploaded successfully: {}", build_json_key(folder, name)),
            Err(e) => tracing::error!("Error uploading file: {}", e),
        }
    }

    pub async fn delete_file(&self, folder: &str, name: &str) {
        match self.try_delete_file(folder, name).await {
            Ok(()) => tracing::info!("File deleted successfully: {}/{}", folder, name),
            Err(e) => tracing::error!("Error deleting file: {}", e),
        }
    }
}
