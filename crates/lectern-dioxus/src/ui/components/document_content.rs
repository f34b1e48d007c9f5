use crate::ui::components::{CodeBlock, Heading, Paragraph};
use crate::ui::scroll::DomLayout;
use dioxus::prelude::*;
use lectern_engine::ContentBlock;

/// Renders the parsed blocks of an article in source order
#[component]
pub fn DocumentContent(
    blocks: Vec<ContentBlock>,
    layout: DomLayout,
    on_copied: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "document-content",
            for (index, block) in blocks.iter().enumerate() {
                {render_block(index, block, &layout, on_copied)}
            }
        }
    }
}

fn render_block(
    index: usize,
    block: &ContentBlock,
    layout: &DomLayout,
    on_copied: Callback<()>,
) -> Element {
    match block {
        ContentBlock::Heading {
            anchor,
            level,
            text,
        } => rsx! {
            Heading {
                key: "{index}",
                anchor: *anchor,
                level: *level,
                text: text.clone(),
                layout: layout.clone(),
            }
        },
        ContentBlock::Paragraph { text } => rsx! {
            Paragraph { key: "{index}", text: text.clone() }
        },
        ContentBlock::CodeBlock { language, code } => rsx! {
            CodeBlock {
                key: "{index}",
                language: language.clone(),
                code: code.clone(),
                on_copied,
            }
        },
        ContentBlock::Blank => rsx! {
            div { key: "{index}", class: "blank-line" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use lectern_engine::parse;

    #[component]
    fn Fixture(source: String) -> Element {
        rsx! {
            DocumentContent {
                blocks: parse(&source),
                layout: DomLayout::default(),
                on_copied: move |_| {},
            }
        }
    }

    fn render_source(source: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            Fixture,
            FixtureProps {
                source: source.to_string(),
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn renders_blocks_in_order() {
        let html = render_source("# A\n\ntext\n## B\n```sh\nls\n```");

        let h1 = html.find(r#"id="heading-0""#).unwrap();
        let blank = html.find("blank-line").unwrap();
        let para = html.find("text</p>").unwrap();
        let h2 = html.find(r#"id="heading-1""#).unwrap();
        let code = html.find("language-sh").unwrap();
        assert!(h1 < blank && blank < para && para < h2 && h2 < code);
    }

    #[test]
    fn code_comments_do_not_become_headings() {
        let html = render_source("```\n# not a heading\n```\n# Real");

        assert!(html.contains("# not a heading"));
        assert!(html.contains(r#"id="heading-0""#));
        assert!(!html.contains(r#"id="heading-1""#));
        assert_eq!(html.matches("<h1").count(), 1);
    }
}
