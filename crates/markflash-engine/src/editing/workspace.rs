use std::ops::Range;
use std::path::Path;

use relative_path::RelativePathBuf;

use serde::{Deserialize, Serialize};

use crate::blocks::BlockKind;
use crate::editing::{BlockCmd, BlockList, Patch};
use crate::generation::{GenerationError, GenerationRequest, MarkdownGenerator};
use crate::io::{self, IoError};
use crate::models::{DocumentId, DocumentStore, StoredDocument};
use crate::preview::{Highlighter, PlainHighlighter, render_html};
use crate::snippets;

pub const WELCOME_TITLE: &str = "Welcome to markFlash";

pub const WELCOME_MARKDOWN: &str = r#"# Welcome to markFlash

This is your low-code markdown workspace.

1.  **Drag & Drop** blocks from the palette above into this editor.
2.  **Edit** your content manually.
3.  **Preview** the result on the right.

### Example Code Block

```javascript
function hello() {
  console.log("Hello, markFlash!");
}
```
"#;

pub const UNTITLED: &str = "Untitled Document";

/// Which editing surface is live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Raw,
    Block,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyncError {
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),
    #[error("Block commands need the block editor to be active")]
    NotInBlockMode,
}

/// Keeps the raw text surface and the block surface in step.
///
/// The markdown string is the single source of truth for the open document.
/// A [`BlockList`] exists only while block mode is active and is derived from
/// the markdown at sync points: entering block mode and switching documents.
/// After that, block edits flow one way: the list is serialized and replaces
/// the markdown if the text differs. Raw edits write the markdown directly and
/// never touch the list, so neither side can trigger the other in a loop.
///
/// Every change to the open document is written through to the store.
#[derive(Debug)]
pub struct Workspace {
    store: DocumentStore,
    current: Option<DocumentId>,
    mode: ViewMode,
    markdown: String,
    title: String,
    blocks: Option<BlockList>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// A workspace holding the welcome document, in raw mode
    pub fn new() -> Self {
        let mut store = DocumentStore::new();
        store.create(WELCOME_TITLE, WELCOME_MARKDOWN);
        Self::with_store(store)
    }

    /// A workspace with no documents at all
    pub fn empty() -> Self {
        Self::with_store(DocumentStore::new())
    }

    /// Open the newest document of `store`, if there is one
    pub fn with_store(store: DocumentStore) -> Self {
        let mut workspace = Self {
            store,
            current: None,
            mode: ViewMode::Raw,
            markdown: String::new(),
            title: String::new(),
            blocks: None,
        };
        if let Some(id) = workspace.store.newest() {
            workspace.load(id);
        }
        workspace
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn current_id(&self) -> Option<DocumentId> {
        self.current
    }

    pub fn current_document(&self) -> Option<&StoredDocument> {
        self.current.and_then(|id| self.store.get(id))
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The derived block list; `None` outside block mode
    pub fn blocks(&self) -> Option<&BlockList> {
        self.blocks.as_ref()
    }

    /// Switch editing surface. Entering block mode is a sync point.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode == self.mode {
            return;
        }
        log::debug!("Switching view mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.blocks = match mode {
            ViewMode::Block => Some(BlockList::from_markdown(&self.markdown)),
            ViewMode::Raw => None,
        };
    }

    /// Create an empty document, open it and switch to the block editor
    pub fn new_document(&mut self) -> DocumentId {
        let id = self.store.create(UNTITLED, "");
        log::debug!("Created document {id}");
        self.load(id);
        self.set_view_mode(ViewMode::Block);
        id
    }

    /// Open another document. In block mode this is a sync point.
    pub fn select_document(&mut self, id: DocumentId) -> Result<(), SyncError> {
        if self.store.get(id).is_none() {
            return Err(SyncError::DocumentNotFound(id));
        }
        self.load(id);
        Ok(())
    }

    /// Replace the markdown from the raw text surface
    pub fn edit_raw(&mut self, markdown: impl Into<String>) {
        self.markdown = markdown.into();
        self.persist();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.persist();
    }

    /// Apply a block edit and propagate it to the markdown
    pub fn apply(&mut self, cmd: BlockCmd) -> Result<Patch, SyncError> {
        let blocks = self.blocks.as_mut().ok_or(SyncError::NotInBlockMode)?;
        let patch = blocks.apply(cmd);
        if !patch.changed {
            log::trace!("Block command left the list unchanged");
            return Ok(patch);
        }

        let markdown = blocks.to_markdown();
        if markdown != self.markdown {
            log::debug!("Block edit v{} rewrote markdown", patch.version);
            self.markdown = markdown;
            self.persist();
        }
        Ok(patch)
    }

    /// Palette insertion on the raw surface.
    ///
    /// Replaces `selection` with the snippet for `kind` and returns the cursor
    /// position after the snippet.
    pub fn insert_snippet(&mut self, kind: BlockKind, selection: Range<usize>) -> usize {
        let (markdown, cursor) = snippets::insert_snippet(&self.markdown, kind, selection);
        self.edit_raw(markdown);
        cursor
    }

    pub fn preview_html(&self) -> String {
        self.preview_html_with(&PlainHighlighter)
    }

    pub fn preview_html_with(&self, highlighter: &dyn Highlighter) -> String {
        render_html(&self.markdown, highlighter)
    }

    /// Generate a document and open it.
    ///
    /// Failures are returned untouched and leave the workspace as it was.
    pub fn import_generated(
        &mut self,
        generator: &dyn MarkdownGenerator,
        request: &GenerationRequest,
    ) -> Result<DocumentId, GenerationError> {
        let markdown = generator.generate(request).inspect_err(|e| {
            log::warn!("Generation for {:?} failed: {e}", request.topic);
        })?;

        let topic = request.topic.trim();
        let title = if topic.is_empty() { UNTITLED } else { topic };
        let id = self.store.create(title, markdown);
        self.load(id);
        Ok(id)
    }

    /// Load every markdown file under `notes_root` as a document.
    ///
    /// Returns how many documents were imported. The open document is kept;
    /// if none is open, the newest import is opened.
    pub fn import_notes(&mut self, notes_root: &Path) -> Result<usize, IoError> {
        let files = io::scan_markdown_files(notes_root)?;
        for relative_path in &files {
            let content = io::read_file(relative_path, notes_root)?;
            self.store
                .import(io::title_for(relative_path), content, relative_path);
        }
        log::info!("Imported {} documents from {}", files.len(), notes_root.display());

        if self.current.is_none()
            && let Some(id) = self.store.newest()
        {
            self.load(id);
        }
        Ok(files.len())
    }

    /// Write the open document under `notes_root`.
    ///
    /// Imported documents go back to the file they came from; others are
    /// written to `<title>.md`. Returns the path written, or `None` when no
    /// document is open.
    pub fn export_current(&self, notes_root: &Path) -> Result<Option<RelativePathBuf>, IoError> {
        let Some(doc) = self.current_document() else {
            return Ok(None);
        };
        let relative_path = doc
            .source
            .clone()
            .unwrap_or_else(|| RelativePathBuf::from(format!("{}.md", self.title)));
        io::write_file(&relative_path, notes_root, &self.markdown)?;
        log::info!("Exported {} to {}", doc.id, relative_path);
        Ok(Some(relative_path))
    }

    fn load(&mut self, id: DocumentId) {
        let Some(doc) = self.store.get(id) else {
            return;
        };
        self.markdown = doc.content.clone();
        self.title = doc.title.clone();
        self.current = Some(id);
        if self.mode == ViewMode::Block {
            self.blocks = Some(BlockList::from_markdown(&self.markdown));
        }
        log::debug!("Opened document {id} ({:?})", self.title);
    }

    fn persist(&mut self) {
        if let Some(id) = self.current {
            self.store.update(id, &self.title, &self.markdown);
        }
    }
}
