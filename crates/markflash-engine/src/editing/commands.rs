use crate::blocks::{BlockId, BlockKind};

/// Direction of a single-step block move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }

    /// Index of the neighbour in this direction, if it exists in `0..len`
    pub fn neighbour(self, index: usize, len: usize) -> Option<usize> {
        let target = index.checked_add_signed(self.offset())?;
        (index < len && target < len).then_some(target)
    }
}

/// Commands that can be applied to a block list
#[derive(Debug, Clone, PartialEq)]
pub enum BlockCmd {
    /// Append a new block. `None` content uses the kind's default.
    Insert {
        kind: BlockKind,
        content: Option<String>,
    },
    Update {
        id: BlockId,
        content: String,
    },
    Delete {
        id: BlockId,
    },
    /// Swap the block at `index` with its neighbour
    Move {
        index: usize,
        direction: Direction,
    },
}
