//! In-memory object store for tests.

use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use super::traits::ObjectStore;
use super::types::{ListPage, ListRequest, StorageError};

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

#[derive(Default)]
struct Inner {
    objects: BTreeMap<String, StoredObject>,
    scripted_pages: Option<Vec<ListPage>>,
    list_requests: Vec<ListRequest>,
    fail_lists_after: Option<usize>,
    fail_all: bool,
}

/// Object store backed by a sorted map.
///
/// Listings paginate over the sorted keys (the continuation token is the last
/// key of the previous page), unless a fixed sequence of pages was scripted.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve exactly these pages, in order, ignoring stored objects.
    pub fn with_pages(pages: Vec<ListPage>) -> Self {
        let store = Self::new();
        store.inner.lock().unwrap().scripted_pages = Some(pages);
        store
    }

    pub fn insert(&self, key: &str, body: impl Into<Vec<u8>>) {
        self.inner.lock().unwrap().objects.insert(
            key.to_string(),
            StoredObject {
                body: body.into(),
                content_type: None,
            },
        );
    }

    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.inner.lock().unwrap().objects.get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.inner.lock().unwrap().objects.keys().cloned().collect()
    }

    /// Every list request received so far.
    pub fn list_requests(&self) -> Vec<ListRequest> {
        self.inner.lock().unwrap().list_requests.clone()
    }

    /// Fail list requests once `n` of them have succeeded.
    pub fn fail_lists_after(&self, n: usize) {
        self.inner.lock().unwrap().fail_lists_after = Some(n);
    }

    /// Fail every request.
    pub fn fail_all(&self) {
        self.inner.lock().unwrap().fail_all = true;
    }

    fn check(inner: &Inner) -> Result<(), StorageError> {
        if inner.fail_all {
            return Err(StorageError::Transport(anyhow!("connection refused")));
        }
        Ok(())
    }

    fn paginate(inner: &Inner, request: &ListRequest) -> ListPage {
        let prefix = request.prefix.as_deref().unwrap_or("");
        let delimiter = request.delimiter.as_deref();
        let max_keys = request.max_keys.unwrap_or(1000).max(1);

        // Fold keys into their common prefix first, then paginate over both.
        let mut entries: BTreeSet<(String, bool)> = BTreeSet::new();
        for key in inner.objects.keys().filter(|k| k.starts_with(prefix)) {
            let rest = &key[prefix.len()..];
            match delimiter.and_then(|d| rest.find(d).map(|i| i + d.len())) {
                Some(end) => entries.insert((format!("{}{}", prefix, &rest[..end]), true)),
                None => entries.insert((key.clone(), false)),
            };
        }

        let start_after = request.continuation_token.as_deref();
        let mut remaining = entries
            .into_iter()
            .filter(|(entry, _)| start_after.is_none_or(|token| entry.as_str() > token))
            .peekable();

        let mut page = ListPage::default();
        let mut last = None;
        while let Some((entry, is_prefix)) = remaining.next() {
            if is_prefix {
                page.common_prefixes.push(entry.clone());
            } else {
                page.keys.push(entry.clone());
            }
            last = Some(entry);
            if page.keys.len() + page.common_prefixes.len() == max_keys {
                break;
            }
        }
        if remaining.peek().is_some() {
            page.next_continuation_token = last;
        }
        page
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn list_page(&self, request: &ListRequest) -> Result<ListPage, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check(&inner)?;

        let served = inner.list_requests.len();
        inner.list_requests.push(request.clone());
        if inner.fail_lists_after.is_some_and(|n| served >= n) {
            return Err(StorageError::Transport(anyhow!("connection reset")));
        }

        match &inner.scripted_pages {
            Some(pages) => Ok(pages.get(served).cloned().unwrap_or_default()),
            None => Ok(Self::paginate(&inner, request)),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let inner = self.inner.lock().unwrap();
        Self::check(&inner)?;
        Ok(inner.objects.contains_key(key))
    }

    async fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let inner = self.inner.lock().unwrap();
        Self::check(&inner)?;
        inner
            .objects
            .get(key)
            .map(|object| object.body.clone())
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }

    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check(&inner)?;
        inner.objects.insert(
            key.to_string(),
            StoredObject {
                body,
                content_type: content_type.map(str::to_string),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check(&inner)?;
        inner.objects.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginates_sorted_keys() {
        let store = MemoryStore::new();
        for key in ["b", "a", "c"] {
            store.insert(key, "x");
        }

        let request = ListRequest::new().with_max_keys(2);
        let first = smol::block_on(store.list_page(&request)).unwrap();
        assert_eq!(first.keys, vec!["a", "b"]);
        assert_eq!(first.next_continuation_token.as_deref(), Some("b"));

        let request = request.with_continuation_token(first.next_continuation_token);
        let second = smol::block_on(store.list_page(&request)).unwrap();
        assert_eq!(second.keys, vec!["c"]);
        assert_eq!(second.next_continuation_token, None);
    }

    #[test]
    fn test_delimiter_folds_common_prefixes() {
        let store = MemoryStore::new();
        store.insert("summer/a.jpg", "x");
        store.insert("summer/b.jpg", "x");
        store.insert("winter/c.jpg", "x");
        store.insert("meta.json", "{}");

        let request = ListRequest::new().with_delimiter("/");
        let page = smol::block_on(store.list_page(&request)).unwrap();
        assert_eq!(page.common_prefixes, vec!["summer/", "winter/"]);
        assert_eq!(page.keys, vec!["meta.json"]);
    }
}
