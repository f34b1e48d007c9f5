use regex::Regex;
use std::sync::LazyLock;

use crate::anchor::AnchorCounter;

use super::NavigationEntry;

/// Any line that starts with 1-6 `#`, then whitespace, then a title.
static HEADING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]+(.+)$").expect("Invalid heading regex"));

/// Scans raw source for heading lines and numbers them in match order.
///
/// This scan is deliberately not fence-aware and accepts levels up to 6, so
/// it can disagree with the parser. See [`super::anchor_drift`].
pub fn extract_toc(source: &str) -> Vec<NavigationEntry> {
    let mut anchors = AnchorCounter::new();
    HEADING_LINE
        .captures_iter(source)
        .map(|caps| {
            let level = caps[1].len() as u8;
            let title = caps[2].trim().to_string();
            NavigationEntry {
                anchor: anchors.next_anchor(),
                title,
                level,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::AnchorId;
    use pretty_assertions::assert_eq;

    fn entry(n: usize, title: &str, level: u8) -> NavigationEntry {
        NavigationEntry {
            anchor: AnchorId(n),
            title: title.to_string(),
            level,
        }
    }

    #[test]
    fn numbers_matches_in_source_order() {
        let toc = extract_toc("# One\ntext\n## Two\n###### Six\n");
        assert_eq!(
            toc,
            vec![entry(0, "One", 1), entry(1, "Two", 2), entry(2, "Six", 6)]
        );
    }

    #[test]
    fn n_heading_lines_give_n_entries() {
        let source: String = (0..25).map(|i| format!("## Part {i}\n")).collect();
        let toc = extract_toc(&source);
        assert_eq!(toc.len(), 25);
        for (i, e) in toc.iter().enumerate() {
            assert_eq!(e.anchor, AnchorId(i));
            assert_eq!(e.title, format!("Part {i}"));
        }
    }

    #[test]
    fn matches_inside_code_fences() {
        let toc = extract_toc("```\n# shell comment\n```\n# Real");
        assert_eq!(toc, vec![entry(0, "shell comment", 1), entry(1, "Real", 1)]);
    }

    #[test]
    fn rejects_non_headings() {
        let toc = extract_toc("#NoSpace\n####### seven\n # indented\n#\n");
        assert!(toc.is_empty());
    }

    #[test]
    fn strips_extra_whitespace_and_carriage_returns() {
        let toc = extract_toc("##\t  Spaced  \r\n");
        assert_eq!(toc, vec![entry(0, "Spaced", 2)]);
    }

    #[test]
    fn empty_source_yields_nothing() {
        assert!(extract_toc("").is_empty());
    }
}
