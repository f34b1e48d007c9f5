pub mod blocks;
pub mod diagnostic;

#[cfg(test)]
mod tests;

use serde::Serialize;

use blocks::{BlockBuilder, ContentBlock, MarkdownLineClassifier};
pub use diagnostic::Diagnostic;

/// Output of a parse pass together with any soft failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedArticle {
    pub blocks: Vec<ContentBlock>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn parse_article(source: &str) -> ParsedArticle {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for (index, line) in source.lines().enumerate() {
        let lc = classifier.classify(index + 1, line);
        builder.push(&lc);
    }

    let (blocks, diagnostics) = builder.finish();
    ParsedArticle {
        blocks,
        diagnostics,
    }
}

/// Parses article source into content blocks. Never fails.
pub fn parse(source: &str) -> Vec<ContentBlock> {
    parse_article(source).blocks
}
