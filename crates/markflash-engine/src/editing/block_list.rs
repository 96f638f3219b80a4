use crate::blocks::{Block, BlockId, BlockKind};
use crate::editing::{BlockCmd, Direction, Patch};
use crate::parsing::parse_blocks;
use crate::serialize::serialize_blocks;

/// Ordered, editable sequence of blocks.
///
/// Every operation is total: unknown ids and out-of-range moves leave the
/// list untouched instead of failing. Blocks that an operation does not
/// target keep their id and relative order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockList {
    blocks: Vec<Block>,
    version: u64,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks, version: 0 }
    }

    /// Derive a fresh list from markdown; all ids are new
    pub fn from_markdown(markdown: &str) -> Self {
        Self::from_blocks(parse_blocks(markdown))
    }

    pub fn to_markdown(&self) -> String {
        serialize_blocks(&self.blocks)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Incremented on every effective change
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Apply a command and describe what happened
    pub fn apply(&mut self, cmd: BlockCmd) -> Patch {
        let (changed, inserted) = match cmd {
            BlockCmd::Insert { kind, content } => {
                let id = match content {
                    Some(content) => self.insert_with_content(kind, content),
                    None => self.insert(kind),
                };
                (true, Some(id))
            }
            BlockCmd::Update { id, content } => (self.update(id, content), None),
            BlockCmd::Delete { id } => (self.delete(id).is_some(), None),
            BlockCmd::Move { index, direction } => (self.move_block(index, direction), None),
        };

        Patch {
            changed,
            inserted,
            version: self.version,
        }
    }

    /// Append a block of `kind` with its default content
    pub fn insert(&mut self, kind: BlockKind) -> BlockId {
        self.push(Block::with_default_content(kind))
    }

    /// Append a block of `kind` with the given content
    pub fn insert_with_content(&mut self, kind: BlockKind, content: impl Into<String>) -> BlockId {
        self.push(Block::new(kind, content))
    }

    /// Replace a block's content. Returns false if the id is unknown.
    pub fn update(&mut self, id: BlockId, content: impl Into<String>) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) else {
            return false;
        };
        block.content = content.into();
        self.version += 1;
        true
    }

    /// Remove a block, returning it if it was present
    pub fn delete(&mut self, id: BlockId) -> Option<Block> {
        let index = self.position(id)?;
        self.version += 1;
        Some(self.blocks.remove(index))
    }

    /// Swap the block at `index` with its neighbour in `direction`.
    ///
    /// Returns false, leaving the list unchanged, when either index falls
    /// outside the list.
    pub fn move_block(&mut self, index: usize, direction: Direction) -> bool {
        let Some(target) = direction.neighbour(index, self.blocks.len()) else {
            return false;
        };
        self.blocks.swap(index, target);
        self.version += 1;
        true
    }

    fn push(&mut self, block: Block) -> BlockId {
        let id = block.id;
        self.blocks.push(block);
        self.version += 1;
        id
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
