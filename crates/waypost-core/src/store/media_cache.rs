use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::rpc::tl::{Document, DocumentData, WebDocument};

/// Binary sub-object descriptors seen in replies, ready for a later download.
#[derive(Debug, Clone)]
pub enum MediaEntry {
    Document(DocumentData),
    WebDocument(WebDocument),
}

/// Lookup of remote media keyed by remote identifier.
///
/// Cheap to clone; all clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MediaCache {
    entries: Arc<RwLock<HashMap<String, MediaEntry>>>,
}

impl MediaCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document_key(id: i64) -> String {
        format!("document{}", id)
    }

    pub fn web_document_key(url: &str) -> String {
        format!("webDocument{}", url)
    }

    /// Empty documents carry nothing to download and are skipped.
    pub fn register_document(&self, document: &Document) {
        if let Document::Document(data) = document {
            self.insert(Self::document_key(data.id), MediaEntry::Document(data.clone()));
        }
    }

    pub fn register_web_document(&self, document: &WebDocument) {
        self.insert(
            Self::web_document_key(document.url()),
            MediaEntry::WebDocument(document.clone()),
        );
    }

    pub fn get(&self, key: &str) -> Option<MediaEntry> {
        self.entries.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn insert(&self, key: String, entry: MediaEntry) {
        tracing::trace!(key = %key, "registering media");
        self.entries.write().insert(key, entry);
    }
}
