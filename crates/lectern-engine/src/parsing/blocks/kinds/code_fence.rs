/// Fenced code block delimiter rules.
///
/// A fence is any line starting with three backticks. The same line shape
/// both opens and closes a block; whatever follows the marker on the
/// opening line is the declared language.
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";
    pub const DEFAULT_LANGUAGE: &'static str = "plaintext";

    /// Returns the info string after the marker if `line` is a fence.
    pub fn sig(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }

    /// Language declared on an opening fence, `plaintext` when absent.
    ///
    /// The value is kept as written; it is only a hint for highlighting.
    pub fn language(info: &str) -> String {
        match info.trim() {
            "" => Self::DEFAULT_LANGUAGE.to_string(),
            lang => lang.to_string(),
        }
    }

    /// Lines starting with a backtick that are not fences carry no block.
    pub fn is_stray_backtick(line: &str) -> bool {
        line.starts_with('`') && Self::sig(line).is_none()
    }
}
