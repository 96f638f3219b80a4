//! Block to markdown conversion.
//!
//! The inverse of [`crate::parsing::parse_blocks`] for the kinds the parser
//! recognizes. Kinds that are stored verbatim are written back unchanged.

use crate::blocks::{Block, BlockKind};

/// Separator placed between consecutive rendered blocks
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Render a block sequence to markdown, one blank line between blocks.
pub fn serialize_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push_str(BLOCK_SEPARATOR);
        }
        write_block(block, &mut out);
    }
    out
}

/// Render a single block to markdown
pub fn serialize_block(block: &Block) -> String {
    let mut out = String::new();
    write_block(block, &mut out);
    out
}

fn write_block(block: &Block, out: &mut String) {
    match block.kind {
        BlockKind::Heading1 => prefixed("# ", &block.content, out),
        BlockKind::Heading2 => prefixed("## ", &block.content, out),
        BlockKind::Heading3 => prefixed("### ", &block.content, out),
        BlockKind::Code(language) => {
            out.push_str("```");
            out.push_str(language.fence_tag());
            out.push('\n');
            out.push_str(&block.content);
            out.push_str("\n```");
        }
        BlockKind::Quote => prefixed("> ", &block.content, out),
        BlockKind::BulletItem => prefixed("- ", &block.content, out),
        BlockKind::Separator => out.push_str("---"),
        BlockKind::Image
        | BlockKind::Text
        | BlockKind::Bold
        | BlockKind::Italic
        | BlockKind::Table
        | BlockKind::NumberedItem
        | BlockKind::Checklist
        | BlockKind::Link => out.push_str(&block.content),
    }
}

fn prefixed(prefix: &str, content: &str, out: &mut String) {
    out.push_str(prefix);
    out.push_str(content);
}
