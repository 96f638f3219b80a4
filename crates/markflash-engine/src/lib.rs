pub mod blocks;
pub mod editing;
pub mod generation;
pub mod io;
pub mod models;
pub mod parsing;
pub mod preview;
pub mod serialize;
pub mod snippets;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use blocks::{Block, BlockId, BlockKind, CodeLanguage};
pub use editing::{BlockCmd, BlockList, Direction, Patch, SyncError, ViewMode, Workspace};
pub use models::{DocumentId, DocumentStore, StoredDocument};
pub use parsing::parse_blocks;
pub use serialize::serialize_blocks;
