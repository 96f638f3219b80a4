//! Markdown to block conversion.
//!
//! Parsing runs in two phases. Each line is first classified on its own
//! ([`classify::classify_line`]); the [`BlockBuilder`] then walks the
//! classified lines in order, carrying the only piece of cross-line state the
//! format needs: whether a fenced code block is open.
//!
//! The parser is line oriented on purpose. Constructs that span several lines
//! (ordered lists, tables, multi-line paragraphs) come back as one block per
//! source line, so `serialize(parse(md))` is not the identity for them.

pub mod builder;
pub mod classify;
pub mod code_fence;

#[cfg(test)]
mod tests;

use crate::blocks::Block;

pub use builder::BlockBuilder;
pub use classify::{LineClass, classify_line};
pub use code_fence::CodeFence;

/// Parse a markdown buffer into an ordered sequence of blocks.
///
/// Every block gets a fresh id. Blank lines outside fences produce nothing and
/// an unterminated fence is still emitted.
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::new();
    for line in markdown.split('\n') {
        builder.push(line.strip_suffix('\r').unwrap_or(line));
    }

    builder.finish()
}
