//! Typed content blocks edited by the structured surface.
//!
//! A [`Block`] is the unit the block editor works with: an identity that never
//! changes for the lifetime of the logical block, a [`BlockKind`], and the raw
//! text the kind needs. For most kinds `content` excludes the markdown syntax
//! that denotes the kind (a heading holds `Title`, not `# Title`). Verbatim
//! kinds (image, link, table, ordered list, checklist) keep their full
//! markdown in `content`; separators hold nothing at all.

pub mod kind;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use kind::{BlockKind, CodeLanguage, ParseBlockKindError};

/// Stable identifier for a block, generated once when the block is created.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct BlockId(pub Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    pub content: String,
}

impl Block {
    /// Create a block with a freshly generated id
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            kind,
            content: content.into(),
        }
    }

    /// Create an empty block of the given kind, using the kind's default content
    pub fn with_default_content(kind: BlockKind) -> Self {
        Self::new(kind, kind.default_content())
    }
}
