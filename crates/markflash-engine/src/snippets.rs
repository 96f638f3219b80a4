//! Palette snippets for the raw text surface.
//!
//! Dropping a block kind onto the raw editor inserts a ready-made markdown
//! example at the cursor, replacing any selection.

use std::ops::Range;

use crate::blocks::{BlockKind, CodeLanguage};

/// Markdown inserted into the raw editor for a block kind
pub fn snippet(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Heading1 => "# Heading 1\n",
        BlockKind::Heading2 => "## Heading 2\n",
        BlockKind::Heading3 => "### Heading 3\n",
        BlockKind::Text => "Lorem ipsum dolor sit amet, consectetur adipiscing elit.\n",
        BlockKind::Bold => "**Bold Text**",
        BlockKind::Italic => "*Italic Text*",
        BlockKind::Code(CodeLanguage::Generic) => "\n```\n// Your code here\n```\n",
        BlockKind::Code(CodeLanguage::JavaScript) => {
            "\n```javascript\nconsole.log(\"Hello World\");\n```\n"
        }
        BlockKind::Code(CodeLanguage::Python) => {
            "\n```python\ndef main():\n    print(\"Hello World\")\n```\n"
        }
        BlockKind::Code(CodeLanguage::Tsx) => {
            "\n```tsx\nimport React from \"react\";\n\nexport const Component = () => <div>Hello</div>;\n```\n"
        }
        BlockKind::Table => {
            "\n| Header 1 | Header 2 |\n| -------- | -------- |\n| Cell 1   | Cell 2   |\n| Cell 3   | Cell 4   |\n"
        }
        BlockKind::BulletItem => "- Item 1\n- Item 2\n- Item 3\n",
        BlockKind::NumberedItem => "1. First item\n2. Second item\n3. Third item\n",
        BlockKind::Checklist => "- [ ] Task 1\n- [x] Task 2\n",
        BlockKind::Quote => "> This is a blockquote.\n",
        BlockKind::Link => "[Link Text](https://example.com)",
        BlockKind::Image => "![Alt Text](https://via.placeholder.com/150)",
        BlockKind::Separator => "\n---\n",
    }
}

/// Replace `selection` in `text` with the snippet for `kind`.
///
/// Returns the new text and the cursor position just after the inserted
/// snippet. The selection is clamped to the text and to char boundaries.
pub fn insert_snippet(text: &str, kind: BlockKind, selection: Range<usize>) -> (String, usize) {
    let end = floor_char_boundary(text, selection.end);
    let start = floor_char_boundary(text, selection.start.min(end));
    let snippet = snippet(kind);

    let mut out = String::with_capacity(text.len() - (end - start) + snippet.len());
    out.push_str(&text[..start]);
    out.push_str(snippet);
    out.push_str(&text[end..]);
    (out, start + snippet.len())
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
