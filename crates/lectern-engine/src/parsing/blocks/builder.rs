use crate::anchor::AnchorCounter;
use crate::parsing::diagnostic::Diagnostic;

use super::{
    classify::{LineClass, LineShape},
    kinds::CodeFence,
    types::ContentBlock,
};

#[derive(Debug)]
enum LeafState {
    None,
    Fence {
        language: String,
        opened_at: usize,
        lines: Vec<String>,
    },
}

/// Single-pass block construction over classified lines.
///
/// Outside a fence every line maps to at most one block. Inside a fence
/// lines are buffered verbatim until the next fence line closes it.
pub struct BlockBuilder {
    anchors: AnchorCounter,
    leaf: LeafState,
    out: Vec<ContentBlock>,
    diagnostics: Vec<Diagnostic>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            anchors: AnchorCounter::new(),
            leaf: LeafState::None,
            out: vec![],
            diagnostics: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        match c.shape {
            LineShape::Fence { info } => {
                self.leaf = LeafState::Fence {
                    language: CodeFence::language(info),
                    opened_at: c.number,
                    lines: vec![],
                };
            }
            LineShape::Heading { level, text } => {
                let anchor = self.anchors.next_anchor();
                self.out.push(ContentBlock::heading(anchor, level, text));
            }
            LineShape::Blank => self.out.push(ContentBlock::Blank),
            LineShape::StrayBacktick => {}
            LineShape::Text => self.out.push(ContentBlock::paragraph(c.text)),
        }
    }

    pub fn finish(mut self) -> (Vec<ContentBlock>, Vec<Diagnostic>) {
        // EOF: an open fence is dropped, not recovered
        if let LeafState::Fence {
            language,
            opened_at,
            lines,
        } = std::mem::replace(&mut self.leaf, LeafState::None)
        {
            let diagnostic = Diagnostic::UnterminatedFence {
                line: opened_at,
                language,
                dropped_lines: lines.len(),
            };
            log::debug!("{diagnostic}");
            self.diagnostics.push(diagnostic);
        }
        (self.out, self.diagnostics)
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, c: &LineClass<'_>) {
        if matches!(c.shape, LineShape::Fence { .. }) {
            self.close_fence();
            return;
        }

        if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(c.text.to_string());
        }
    }

    fn close_fence(&mut self) {
        if let LeafState::Fence {
            language, lines, ..
        } = std::mem::replace(&mut self.leaf, LeafState::None)
        {
            self.out.push(ContentBlock::code(language, lines.join("\n")));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
