//! Integration tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/`; output is compared through inline
//! snapshots of the normalised block list.


use pretty_assertions::assert_eq;

use crate::anchor::AnchorId;
use crate::parsing::{Diagnostic, blocks::ContentBlock, parse, parse_article};

#[test]
fn fixture_getting_started() {
    let md = include_str!("fixtures/getting_started.md");
    let parsed = parse_article(md);
    invariants::check(md, &parsed.blocks);
    assert!(parsed.diagnostics.is_empty());

    insta::assert_snapshot!(normalize::normalize(&parsed.blocks), @r"
    H1 heading-0 Getting Started
    BLANK
    P Lectern reads plain articles.
    BLANK
    H2 heading-1 Install
    CODE[sh] cargo install lectern
    P #### Not a heading
    H3 heading-2 Usage
    CODE[plaintext] # comment in code
    ");
}

#[test]
fn headings_paragraphs_and_blanks() {
    let blocks = parse("# A\n\ntext\n## B\n");
    assert_eq!(
        blocks,
        vec![
            ContentBlock::heading(AnchorId(0), 1, "A"),
            ContentBlock::Blank,
            ContentBlock::paragraph("text"),
            ContentBlock::heading(AnchorId(1), 2, "B"),
        ]
    );
}

#[test]
fn single_code_block() {
    let blocks = parse("```js\nconsole.log(1)\n```");
    assert_eq!(blocks, vec![ContentBlock::code("js", "console.log(1)")]);
}

#[test]
fn anchor_counter_ignores_level() {
    let blocks = parse("### c\n# a\n## b");
    let anchors: Vec<_> = blocks.iter().filter_map(ContentBlock::anchor).collect();
    assert_eq!(anchors, vec![AnchorId(0), AnchorId(1), AnchorId(2)]);
}

#[test]
fn inline_markup_is_literal() {
    let blocks = parse("Some *emphasis* and [a link](http://x) and `code`");
    assert_eq!(
        blocks,
        vec![ContentBlock::paragraph(
            "Some *emphasis* and [a link](http://x) and `code`"
        )]
    );
}

#[test]
fn whitespace_only_line_is_blank() {
    assert_eq!(parse(" \t "), vec![ContentBlock::Blank]);
}

#[test]
fn crlf_source() {
    let blocks = parse("# A\r\nbody\r\n");
    assert_eq!(
        blocks,
        vec![
            ContentBlock::heading(AnchorId(0), 1, "A"),
            ContentBlock::paragraph("body"),
        ]
    );
}

/// Lines inside an unterminated fence never surface as headings or paragraphs.
#[test]
fn unterminated_fence_hides_following_lines() {
    let md = "# Kept\n```\n# Hidden\nhidden text\n";
    let parsed = parse_article(md);
    assert_eq!(parsed.blocks, vec![ContentBlock::heading(AnchorId(0), 1, "Kept")]);
    assert!(matches!(
        parsed.diagnostics.as_slice(),
        [Diagnostic::UnterminatedFence { line: 2, .. }]
    ));
}

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert_eq!(parse("\n\n\n"), vec![ContentBlock::Blank; 3]);
}

/// Parsing arbitrary byte soup terminates and keeps the invariants.
#[test]
fn malformed_input_never_panics() {
    let inputs = [
        "```",
        "```\n```\n```",
        "####### seven",
        "#\n##\n###\n",
        "``` \n\u{feff}# bom\n```",
        "\r\n\r\n",
        "# ünïcödé\n```日本語\nコード\n```",
    ];
    for md in inputs {
        let parsed = parse_article(md);
        invariants::check(md, &parsed.blocks);
    }
}
