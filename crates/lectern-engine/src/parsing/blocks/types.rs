use serde::Serialize;

use crate::anchor::AnchorId;

/// A rendered unit of an article, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    /// `#`, `##` or `###` heading. `level` is always 1..=3.
    Heading {
        anchor: AnchorId,
        level: u8,
        text: String,
    },
    /// A single non-blank source line, passed through without inline markup.
    Paragraph { text: String },
    /// A closed fenced code block.
    CodeBlock { language: String, code: String },
    /// An empty or whitespace-only source line.
    Blank,
}

impl ContentBlock {
    pub fn heading(anchor: AnchorId, level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            anchor,
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn code(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self::CodeBlock {
            language: language.into(),
            code: code.into(),
        }
    }

    /// Anchor of a heading block.
    pub fn anchor(&self) -> Option<AnchorId> {
        match self {
            Self::Heading { anchor, .. } => Some(*anchor),
            _ => None,
        }
    }
}
