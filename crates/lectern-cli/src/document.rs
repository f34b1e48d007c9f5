//! Article layout in terminal rows.
//!
//! Lines are never wrapped, so every block maps to a fixed set of rows and
//! heading positions can be read straight from the layout.

use lectern_engine::{AnchorId, ContentBlock, HeadingPosition, ScrollState};

/// Rows between the top of the pane and a heading for it to count as read.
pub const ROW_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Heading(u8),
    Text,
    CodeFrame,
    Code,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    pub text: String,
}

impl Row {
    fn new(kind: RowKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRows {
    pub rows: Vec<Row>,
    /// Row index of every heading, in document order.
    pub headings: Vec<(AnchorId, usize)>,
}

impl DocumentRows {
    pub fn layout(blocks: &[ContentBlock]) -> Self {
        let mut out = Self::default();

        for block in blocks {
            match block {
                ContentBlock::Heading {
                    anchor,
                    level,
                    text,
                } => {
                    out.headings.push((*anchor, out.rows.len()));
                    let marker = "#".repeat(usize::from(*level));
                    out.rows
                        .push(Row::new(RowKind::Heading(*level), format!("{marker} {text}")));
                }
                ContentBlock::Paragraph { text } => {
                    out.rows.push(Row::new(RowKind::Text, text.as_str()));
                }
                ContentBlock::CodeBlock { language, code } => {
                    out.rows
                        .push(Row::new(RowKind::CodeFrame, format!("┌─ {language}")));
                    for line in code.split('\n') {
                        out.rows.push(Row::new(RowKind::Code, format!("│ {line}")));
                    }
                    out.rows.push(Row::new(RowKind::CodeFrame, "└─"));
                }
                ContentBlock::Blank => out.rows.push(Row::new(RowKind::Blank, "")),
            }
        }

        out
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_of(&self, anchor: AnchorId) -> Option<usize> {
        self.headings
            .iter()
            .find(|(a, _)| *a == anchor)
            .map(|(_, row)| *row)
    }

    /// Largest scroll offset that still shows the last row.
    pub fn max_scroll(&self, height: usize) -> usize {
        self.rows.len().saturating_sub(height.max(1))
    }

    /// Heading geometry for a pane of `height` rows scrolled to `scroll`.
    pub fn scroll_state(&self, scroll: usize, height: usize) -> ScrollState {
        ScrollState {
            scroll_top: scroll as f64,
            container_height: height as f64,
            headings: self
                .headings
                .iter()
                .map(|&(anchor, row)| HeadingPosition {
                    anchor,
                    offset: row as f64 - scroll as f64,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_engine::{parse, resolve_active};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const ARTICLE: &str = "# Intro\n\nwelcome\n\n## Setup\n```sh\nmake\nmake install\n```\n\n## Usage\nrun it\n";

    fn rows() -> DocumentRows {
        DocumentRows::layout(&parse(ARTICLE))
    }

    #[test]
    fn lays_out_blocks_as_rows() {
        let doc = rows();
        let text: Vec<&str> = doc.rows.iter().map(|r| r.text.as_str()).collect();

        assert_eq!(
            text,
            vec![
                "# Intro",
                "",
                "welcome",
                "",
                "## Setup",
                "┌─ sh",
                "│ make",
                "│ make install",
                "└─",
                "",
                "## Usage",
                "run it",
            ]
        );
        assert_eq!(
            doc.headings,
            vec![(AnchorId(0), 0), (AnchorId(1), 4), (AnchorId(2), 10)]
        );
        assert_eq!(doc.rows[4].kind, RowKind::Heading(2));
    }

    #[rstest]
    #[case(0, AnchorId(0))]
    #[case(2, AnchorId(1))]
    #[case(4, AnchorId(1))]
    #[case(8, AnchorId(2))]
    fn active_heading_follows_scroll(#[case] scroll: usize, #[case] expected: AnchorId) {
        let doc = rows();
        let state = doc.scroll_state(scroll, 5);
        assert_eq!(resolve_active(&state, ROW_THRESHOLD), Some(expected));
    }

    #[test]
    fn max_scroll_keeps_last_row_visible() {
        let doc = rows();
        assert_eq!(doc.max_scroll(5), 7);
        assert_eq!(doc.max_scroll(100), 0);
        assert_eq!(DocumentRows::default().max_scroll(0), 0);
    }

    #[test]
    fn row_lookup() {
        let doc = rows();
        assert_eq!(doc.row_of(AnchorId(2)), Some(10));
        assert_eq!(doc.row_of(AnchorId(9)), None);
    }
}
