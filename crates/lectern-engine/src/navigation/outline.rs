use crate::parsing::blocks::ContentBlock;

use super::NavigationEntry;

/// Navigation entries taken straight from the parser's headings.
///
/// Because the entries come from the same pass that numbered the anchors,
/// the Nth entry always points at the Nth rendered heading.
pub fn outline(blocks: &[ContentBlock]) -> Vec<NavigationEntry> {
    blocks
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Heading {
                anchor,
                level,
                text,
            } => Some(NavigationEntry {
                anchor: *anchor,
                title: text.clone(),
                level: *level,
            }),
            _ => None,
        })
        .collect()
}
