use crate::blocks::{Block, BlockKind, CodeLanguage};

use super::{
    classify::{LineClass, classify_line},
    code_fence::CodeFence,
};

#[derive(Debug)]
enum LeafState {
    None,
    Fence {
        language: CodeLanguage,
        lines: Vec<String>,
    },
}

/// Accumulates blocks from lines fed in source order.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<Block>,
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str) {
        if self.in_fence() {
            self.consume_fence_line(line);
            return;
        }

        match classify_line(line) {
            LineClass::Blank => {}
            LineClass::Fence(tag) => {
                self.leaf = LeafState::Fence {
                    language: CodeLanguage::from_fence_tag(tag),
                    lines: vec![],
                };
            }
            LineClass::Heading { level, text } => {
                let kind = match level {
                    1 => BlockKind::Heading1,
                    2 => BlockKind::Heading2,
                    _ => BlockKind::Heading3,
                };
                self.emit(kind, text);
            }
            LineClass::Separator => self.emit(BlockKind::Separator, ""),
            LineClass::Quote(text) => self.emit(BlockKind::Quote, text),
            LineClass::BulletItem(text) => self.emit(BlockKind::BulletItem, text),
            LineClass::Image(text) => self.emit(BlockKind::Image, text),
            LineClass::Text(text) => self.emit(BlockKind::Text, text),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush: an unterminated fence still becomes a block
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, line: &str) {
        if CodeFence::sig(line).is_some() {
            self.flush_fence();
        } else if let LeafState::Fence { lines, .. } = &mut self.leaf {
            // empty lines before the first body line are dropped
            if line.is_empty() && lines.is_empty() {
                return;
            }
            lines.push(line.to_string());
        }
    }

    fn flush_fence(&mut self) {
        if let LeafState::Fence { language, lines } =
            std::mem::replace(&mut self.leaf, LeafState::None)
        {
            self.emit(BlockKind::Code(language), &lines.join("\n"));
        }
    }

    fn emit(&mut self, kind: BlockKind, content: &str) {
        self.out.push(Block::new(kind, content));
    }
}
