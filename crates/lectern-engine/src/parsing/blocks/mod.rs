//! # Block Parsing
//!
//! Two-phase block parsing over the lines of an article.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (fence marker, heading level, blank).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` tracks whether a
//!    code fence is open and emits `ContentBlock`s in source order.
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no heading or paragraph rules inside
//! - Heading anchors are numbered once per heading, whatever its level
//! - An unterminated fence produces no block

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineShape, MarkdownLineClassifier};
pub use types::ContentBlock;
