/// ATX-style heading rules used by the document parser.
///
/// Only `# `, `## ` and `### ` are headings. Deeper markers, a missing
/// space, or a tab after the markers all leave the line to the paragraph
/// rule.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 3;

    /// Returns the level and text of a heading line.
    pub fn recognise(line: &str) -> Option<(u8, &str)> {
        let markers = line.bytes().take_while(|b| *b == Self::MARKER).count();
        if markers == 0 || markers > usize::from(Self::MAX_LEVEL) {
            return None;
        }

        let text = line[markers..].strip_prefix(' ')?;
        Some((markers as u8, text.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("## Section", Some((2, "Section")))]
    #[case("### Detail", Some((3, "Detail")))]
    #[case("#### Too deep", None)]
    #[case("#NoSpace", None)]
    #[case("#\tTabbed", None)]
    #[case(" # Indented", None)]
    #[case("plain text", None)]
    #[case("# ", Some((1, "")))]
    #[case("##  Padded  ", Some((2, "Padded")))]
    fn recognises_headings(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(AtxHeading::recognise(line), expected);
    }
}
