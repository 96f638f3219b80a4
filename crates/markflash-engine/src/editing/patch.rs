use crate::blocks::BlockId;

/// Outcome of applying a [`crate::editing::BlockCmd`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Whether the block sequence changed
    pub changed: bool,
    /// Id of the block created by an insert
    pub inserted: Option<BlockId>,
    /// Block list version after the command
    pub version: u64,
}
