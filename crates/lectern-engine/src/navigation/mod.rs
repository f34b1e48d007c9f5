//! # Navigation
//!
//! Table-of-contents entries for an article. Two sources exist:
//!
//! - **`outline`**: entries derived from the parser's headings. Fence-aware,
//!   levels 1-3, anchors identical to the rendered headings by construction.
//! - **`scan`**: an independent regex scan of the raw text. Levels 1-6 and
//!   not fence-aware, so its numbering can drift from the rendered anchors.
//!
//! Hosts pick one through [`NavigationMode`].

pub mod outline;
pub mod scan;

use serde::{Deserialize, Serialize};

use crate::anchor::AnchorId;
use crate::parsing::blocks::ContentBlock;

pub use outline::outline;
pub use scan::extract_toc;

/// One row of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub anchor: AnchorId,
    pub title: String,
    /// Nesting level, 1..=6.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Entries come from the parsed headings.
    #[default]
    Parsed,
    /// Entries come from the raw-text scan.
    Scan,
}

/// Builds the navigation list for an already parsed article.
pub fn navigation_for(
    source: &str,
    blocks: &[ContentBlock],
    mode: NavigationMode,
) -> Vec<NavigationEntry> {
    match mode {
        NavigationMode::Parsed => outline(blocks),
        NavigationMode::Scan => {
            let entries = extract_toc(source);
            if let Some(drift) = anchor_drift(blocks, &entries) {
                log::warn!("table of contents drifts from rendered headings: {drift}");
            }
            entries
        }
    }
}

/// First position where the rendered headings and the entries disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorDrift {
    pub anchor: AnchorId,
    pub rendered: Option<String>,
    pub listed: Option<String>,
}

impl std::fmt::Display for AnchorDrift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} renders {:?} but is listed as {:?}",
            self.anchor, self.rendered, self.listed
        )
    }
}

/// Compares rendered headings with navigation entries anchor by anchor.
pub fn anchor_drift(blocks: &[ContentBlock], entries: &[NavigationEntry]) -> Option<AnchorDrift> {
    let rendered = outline(blocks);
    let len = rendered.len().max(entries.len());

    (0..len).find_map(|i| {
        let r = rendered.get(i);
        let e = entries.get(i);
        let same = matches!((r, e), (Some(r), Some(e)) if r.title == e.title && r.level == e.level);
        (!same).then(|| AnchorDrift {
            anchor: AnchorId(i),
            rendered: r.map(|r| r.title.clone()),
            listed: e.map(|e| e.title.clone()),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn modes_agree_on_simple_articles() {
        let md = "# Intro\ntext\n## Details\n### More";
        let blocks = parse(md);
        let parsed = navigation_for(md, &blocks, NavigationMode::Parsed);
        let scanned = navigation_for(md, &blocks, NavigationMode::Scan);
        assert_eq!(parsed, scanned);
        assert_eq!(anchor_drift(&blocks, &scanned), None);
    }

    #[test]
    fn fenced_comment_shifts_scanned_anchors() {
        let md = "# Intro\n```sh\n# install\n```\n## Usage";
        let blocks = parse(md);
        let scanned = extract_toc(md);

        let drift = anchor_drift(&blocks, &scanned).unwrap();
        assert_eq!(drift.anchor, AnchorId(1));
        assert_eq!(drift.rendered.as_deref(), Some("Usage"));
        assert_eq!(drift.listed.as_deref(), Some("install"));
    }

    #[test]
    fn deep_heading_is_listed_but_not_rendered() {
        let md = "# A\n#### Deep";
        let blocks = parse(md);
        let drift = anchor_drift(&blocks, &extract_toc(md)).unwrap();
        assert_eq!(drift.anchor, AnchorId(1));
        assert_eq!(drift.rendered, None);
        assert_eq!(drift.listed.as_deref(), Some("Deep"));
    }

    #[test]
    fn parsed_mode_ignores_fenced_comments() {
        let md = "# Intro\n```sh\n# install\n```\n## Usage";
        let blocks = parse(md);
        let entries = navigation_for(md, &blocks, NavigationMode::Parsed);
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Intro", "Usage"]);
    }
}
