use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a heading, used both as the element id in the rendered
/// document and as the key that ties a table-of-contents entry to it.
///
/// Anchors are numbered per parse pass in document order and always render
/// as `heading-{n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnchorId(pub usize);

impl AnchorId {
    pub const PREFIX: &'static str = "heading-";

    pub fn index(self) -> usize {
        self.0
    }

    /// Parses the `heading-{n}` element id form back into an anchor.
    pub fn parse(id: &str) -> Option<Self> {
        id.strip_prefix(Self::PREFIX)?.parse().ok().map(AnchorId)
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

/// Hands out anchors in order for a single pass over a document.
#[derive(Debug, Default)]
pub struct AnchorCounter {
    next: usize,
}

impl AnchorCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_anchor(&mut self) -> AnchorId {
        let id = AnchorId(self.next);
        self.next += 1;
        id
    }
}
