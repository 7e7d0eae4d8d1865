//! Photo bucket access.
//!
//! This module wraps a single object-storage bucket holding the photo
//! albums. Albums are top-level "folders" (common prefixes under `/`),
//! photos are objects inside them, and album metadata is stored as JSON
//! documents next to the photos.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    AlbumStorage                             │
//! │  - Builds keys and public URLs                              │
//! │  - Paginates listings, parses JSON metadata                 │
//! │  - try_* (typed errors) and degraded (log + empty) calls    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    dyn ObjectStore                          │
//! │  - list_page / exists / read / put / delete                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┴───────────────┐
//!              ▼                               ▼
//! ┌──────────────────┐               ┌──────────────────┐
//! │   S3Store        │               │  MemoryStore     │
//! │   (OpenDAL)      │               │  (tests only)    │
//! └──────────────────┘               └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use palbum::services::bucket::{AlbumStorage, StorageConfig};
//!
//! let config = StorageConfig::from_env()?;
//! let storage = AlbumStorage::from_config(&config)?;
//!
//! for folder in storage.list_folders().await {
//!     println!("{folder}");
//! }
//!
//! let urls = storage.list_files(Some("summer"), 100).await;
//! ```

mod client;
mod keys;
#[cfg(test)]
mod memory;
mod s3;
mod traits;
mod types;

pub use client::{AlbumStorage, DEFAULT_PAGE_SIZE};
pub use keys::{build_json_key, build_key, build_public_url, folder_prefix};
pub use s3::S3Store;
pub use traits::{BoxedObjectStore, ObjectStore};
pub use types::{ListPage, ListRequest, StorageConfig, StorageError, UploadFile};
