//! Document providers

use rustc_hash::FxHashMap;

use crate::error::FetchError;

/// Supplies document text by URL.
///
/// Network access and response caching live behind this trait. Fetches for
/// one source run concurrently, so implementations must be `Sync`.
pub trait DocumentProvider: Sync {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Provider over documents already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    documents: FxHashMap<String, String>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(url, text);
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(url.into(), text.into());
    }
}

impl DocumentProvider for StaticProvider {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| format!("no document for {url}").into())
    }
}
