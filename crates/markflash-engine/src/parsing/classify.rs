use std::sync::OnceLock;

use regex::Regex;

use super::code_fence::CodeFence;

/// Whole-line `![alt](url)` image syntax
fn is_image_line(line: &str) -> bool {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = IMAGE_REGEX
        .get_or_init(|| Regex::new(r"^!\[(.*?)\]\((.*?)\)$").expect("Invalid image regex"));
    regex.is_match(line)
}

/// Classification of a single line outside a fence, containing only local facts.
///
/// Borrowed text is the block content with its markdown prefix already removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    /// Opening fence with its (possibly empty) language tag
    Fence(&'a str),
    Heading { level: u8, text: &'a str },
    Separator,
    Quote(&'a str),
    BulletItem(&'a str),
    Image(&'a str),
    Text(&'a str),
}

/// Classify one line. Rules are checked in precedence order; the first match wins.
pub fn classify_line(line: &str) -> LineClass<'_> {
    let trimmed = line.trim();

    if let Some(tag) = CodeFence::sig(line) {
        return LineClass::Fence(tag);
    }

    if let Some(text) = line.strip_prefix("# ") {
        return LineClass::Heading { level: 1, text };
    }
    if let Some(text) = line.strip_prefix("## ") {
        return LineClass::Heading { level: 2, text };
    }
    if let Some(text) = line.strip_prefix("### ") {
        return LineClass::Heading { level: 3, text };
    }

    if trimmed == "---" || trimmed == "***" {
        return LineClass::Separator;
    }

    if let Some(text) = line.strip_prefix("> ") {
        return LineClass::Quote(text);
    }

    // Prefix comes off the trimmed line, so indentation is dropped too
    if let Some(text) = trimmed.strip_prefix("- ") {
        return LineClass::BulletItem(text);
    }

    if is_image_line(line) {
        return LineClass::Image(line);
    }

    if trimmed.is_empty() {
        LineClass::Blank
    } else {
        LineClass::Text(line)
    }
}
