use relative_path::{RelativePath, RelativePathBuf};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Unique identifier for a stored document
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A document body with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    /// Milliseconds since the Unix epoch
    pub last_modified: u64,
    /// Notes-relative path the document was imported from
    pub source: Option<RelativePathBuf>,
}

/// In-memory collection of documents.
///
/// Listing order is newest first, matching how new documents appear at the
/// top of a document list. Nothing is persisted.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: Vec<StoredDocument>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document and return its id
    pub fn create(&mut self, title: impl Into<String>, content: impl Into<String>) -> DocumentId {
        self.insert(title.into(), content.into(), None)
    }

    /// Create a document that remembers the file it came from
    pub fn import(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        source: &RelativePath,
    ) -> DocumentId {
        self.insert(title.into(), content.into(), Some(source.to_relative_path_buf()))
    }

    pub fn get(&self, id: DocumentId) -> Option<&StoredDocument> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// All documents, newest first
    pub fn list(&self) -> impl Iterator<Item = &StoredDocument> {
        self.documents.iter()
    }

    /// Id of the most recently created document
    pub fn newest(&self) -> Option<DocumentId> {
        self.documents.first().map(|d| d.id)
    }

    /// Replace a document's title and content, touching its modification time.
    ///
    /// Returns false if the id is unknown.
    pub fn update(&mut self, id: DocumentId, title: &str, content: &str) -> bool {
        let Some(doc) = self.documents.iter_mut().find(|d| d.id == id) else {
            return false;
        };
        doc.title = title.to_string();
        doc.content = content.to_string();
        doc.last_modified = now_millis();
        true
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn insert(
        &mut self,
        title: String,
        content: String,
        source: Option<RelativePathBuf>,
    ) -> DocumentId {
        let id = DocumentId::new();
        self.documents.insert(
            0,
            StoredDocument {
                id,
                title,
                content,
                last_modified: now_millis(),
                source,
            },
        );
        id
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
