use super::kinds::{AtxHeading, CodeFence};

/// What a line looks like on its own, before fence context is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape<'a> {
    /// Starts with the fence marker; carries the text after it.
    Fence { info: &'a str },
    Heading { level: u8, text: &'a str },
    Blank,
    /// Starts with a backtick but is not a fence. Produces no block.
    StrayBacktick,
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// 1-based source line number.
    pub number: usize,
    /// Line text without its line terminator.
    pub text: &'a str,
    pub shape: LineShape<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'a>(&self, number: usize, line: &'a str) -> LineClass<'a> {
        let text = line.trim_end_matches(['\r', '\n']);

        let shape = if let Some(info) = CodeFence::sig(text) {
            LineShape::Fence { info }
        } else if let Some((level, heading)) = AtxHeading::recognise(text) {
            LineShape::Heading {
                level,
                text: heading,
            }
        } else if text.trim().is_empty() {
            LineShape::Blank
        } else if CodeFence::is_stray_backtick(text) {
            LineShape::StrayBacktick
        } else {
            LineShape::Text
        };

        LineClass {
            number,
            text,
            shape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(line: &str) -> LineShape<'_> {
        MarkdownLineClassifier.classify(1, line).shape
    }

    #[test]
    fn classifies_each_shape() {
        assert_eq!(shape("```js"), LineShape::Fence { info: "js" });
        assert_eq!(
            shape("## Setup"),
            LineShape::Heading {
                level: 2,
                text: "Setup"
            }
        );
        assert_eq!(shape("   "), LineShape::Blank);
        assert_eq!(shape("`x`"), LineShape::StrayBacktick);
        assert_eq!(shape("#### deep"), LineShape::Text);
    }

    #[test]
    fn strips_carriage_return() {
        let class = MarkdownLineClassifier.classify(4, "# Title\r");
        assert_eq!(class.text, "# Title");
        assert_eq!(class.number, 4);
        assert_eq!(
            class.shape,
            LineShape::Heading {
                level: 1,
                text: "Title"
            }
        );
    }
}
