//! Block editing and surface synchronization.
//!
//! - **`block_list`**: `BlockList`, the ordered block sequence edited by the
//!   structured surface
//! - **`commands`**: `BlockCmd` enum describing every block edit
//! - **`patch`**: outcome of applying a command
//! - **`workspace`**: `Workspace`, which owns the document store and keeps the
//!   raw markdown and the block list consistent
//!
//! ## Usage Pattern
//!
//! ```rust
//! use markflash_engine::editing::*;
//! use markflash_engine::blocks::BlockKind;
//!
//! let mut ws = Workspace::empty();
//! ws.new_document();
//!
//! ws.apply(BlockCmd::Insert { kind: BlockKind::Heading1, content: Some("Notes".into()) })
//!     .unwrap();
//! assert_eq!(ws.markdown(), "# Notes");
//! ```

pub mod block_list;
pub mod commands;
pub mod patch;
pub mod workspace;

pub use block_list::BlockList;
pub use commands::{BlockCmd, Direction};
pub use patch::Patch;
pub use workspace::{SyncError, ViewMode, Workspace};
