use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language tag carried by a code block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeLanguage {
    JavaScript,
    Python,
    Tsx,
    Generic,
}

impl CodeLanguage {
    /// Map the tag found after an opening fence to a language.
    ///
    /// Unknown and empty tags fall back to [`CodeLanguage::Generic`].
    pub fn from_fence_tag(tag: &str) -> Self {
        match tag {
            "javascript" | "js" => CodeLanguage::JavaScript,
            "python" | "py" => CodeLanguage::Python,
            "tsx" | "react" => CodeLanguage::Tsx,
            _ => CodeLanguage::Generic,
        }
    }

    /// Tag written after the opening fence when serializing
    pub fn fence_tag(self) -> &'static str {
        match self {
            CodeLanguage::JavaScript => "javascript",
            CodeLanguage::Python => "python",
            CodeLanguage::Tsx => "tsx",
            CodeLanguage::Generic => "",
        }
    }
}

/// The closed set of block kinds the block editor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BlockKind {
    Heading1,
    Heading2,
    Heading3,
    Text,
    Bold,
    Italic,
    Code(CodeLanguage),
    Table,
    BulletItem,
    NumberedItem,
    Checklist,
    Quote,
    Link,
    Image,
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown block kind: {0}")]
pub struct ParseBlockKindError(pub String);

const IMAGE_PLACEHOLDER: &str = "![Alt text](https://via.placeholder.com/150)";

impl BlockKind {
    pub const ALL: [BlockKind; 18] = [
        BlockKind::Heading1,
        BlockKind::Heading2,
        BlockKind::Heading3,
        BlockKind::Text,
        BlockKind::Bold,
        BlockKind::Italic,
        BlockKind::Code(CodeLanguage::JavaScript),
        BlockKind::Code(CodeLanguage::Python),
        BlockKind::Code(CodeLanguage::Tsx),
        BlockKind::Code(CodeLanguage::Generic),
        BlockKind::Table,
        BlockKind::BulletItem,
        BlockKind::NumberedItem,
        BlockKind::Checklist,
        BlockKind::Quote,
        BlockKind::Link,
        BlockKind::Image,
        BlockKind::Separator,
    ];

    /// Short name used wherever a kind crosses a text boundary
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Heading1 => "h1",
            BlockKind::Heading2 => "h2",
            BlockKind::Heading3 => "h3",
            BlockKind::Text => "text",
            BlockKind::Bold => "bold",
            BlockKind::Italic => "italic",
            BlockKind::Code(CodeLanguage::JavaScript) => "code-js",
            BlockKind::Code(CodeLanguage::Python) => "code-py",
            BlockKind::Code(CodeLanguage::Tsx) => "code-tsx",
            BlockKind::Code(CodeLanguage::Generic) => "code-generic",
            BlockKind::Table => "table",
            BlockKind::BulletItem => "ul",
            BlockKind::NumberedItem => "ol",
            BlockKind::Checklist => "check",
            BlockKind::Quote => "quote",
            BlockKind::Link => "link",
            BlockKind::Image => "image",
            BlockKind::Separator => "separator",
        }
    }

    /// Human readable label shown in block palettes
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Heading1 => "Heading 1",
            BlockKind::Heading2 => "Heading 2",
            BlockKind::Heading3 => "Heading 3",
            BlockKind::Text => "Paragraph",
            BlockKind::Bold => "Bold",
            BlockKind::Italic => "Italic",
            BlockKind::Code(CodeLanguage::JavaScript) => "JS Code",
            BlockKind::Code(CodeLanguage::Python) => "Py Code",
            BlockKind::Code(CodeLanguage::Tsx) => "React",
            BlockKind::Code(CodeLanguage::Generic) => "Code Block",
            BlockKind::Table => "Table",
            BlockKind::BulletItem => "Bullet List",
            BlockKind::NumberedItem => "Ordered",
            BlockKind::Checklist => "Task",
            BlockKind::Quote => "Blockquote",
            BlockKind::Link => "Link",
            BlockKind::Image => "Image",
            BlockKind::Separator => "Divider",
        }
    }

    pub fn is_code(self) -> bool {
        matches!(self, BlockKind::Code(_))
    }

    /// Whether `content` stores the full markdown syntax instead of stripped text
    pub fn is_verbatim(self) -> bool {
        matches!(
            self,
            BlockKind::Image
                | BlockKind::Link
                | BlockKind::Table
                | BlockKind::NumberedItem
                | BlockKind::Checklist
        )
    }

    /// Content given to a block created from a palette action
    pub fn default_content(self) -> &'static str {
        match self {
            BlockKind::Image => IMAGE_PLACEHOLDER,
            _ => "",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockKind {
    type Err = ParseBlockKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseBlockKindError(s.to_string()))
    }
}

impl TryFrom<String> for BlockKind {
    type Error = ParseBlockKindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BlockKind> for String {
    fn from(kind: BlockKind) -> Self {
        kind.name().to_string()
    }
}
