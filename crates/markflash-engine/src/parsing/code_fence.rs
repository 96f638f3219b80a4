/// Triple backtick fence delimiting a code region
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// If the trimmed line starts with a fence, return the text right after it.
    ///
    /// The tag may be empty. Whitespace between the backticks and the tag is
    /// part of the tag, so "``` js" does not name a known language. Any fence
    /// line closes an open fence, tagged or not.
    pub fn sig(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::BACKTICKS)
    }
}
