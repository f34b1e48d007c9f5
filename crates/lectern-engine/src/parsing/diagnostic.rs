use serde::Serialize;
use std::fmt;

/// A soft failure noticed while parsing.
///
/// Diagnostics never change the produced blocks; they only explain what was
/// left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A code fence opened at `line` was still open at end of input. Its
    /// content was dropped.
    UnterminatedFence {
        line: usize,
        language: String,
        dropped_lines: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedFence {
                line,
                language,
                dropped_lines,
            } => write!(
                f,
                "code fence ({language}) opened on line {line} is never closed; \
                 {dropped_lines} line(s) dropped"
            ),
        }
    }
}
