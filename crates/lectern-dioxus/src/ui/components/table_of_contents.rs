use dioxus::prelude::*;
use lectern_engine::{AnchorId, NavigationEntry};

/// Indentation class for an entry: top-level entries sit flush, second
/// level is indented once and everything deeper twice.
pub fn indent_class(level: u8) -> &'static str {
    match level {
        0 | 1 => "toc-level-1",
        2 => "toc-level-2",
        _ => "toc-level-3",
    }
}

fn entry_class(entry: &NavigationEntry, active: Option<AnchorId>) -> String {
    let indent = indent_class(entry.level);
    if active == Some(entry.anchor) {
        format!("toc-entry {indent} active")
    } else {
        format!("toc-entry {indent}")
    }
}

/// Sidebar list of headings. Renders nothing for an article without any.
#[component]
pub fn TableOfContents(
    entries: Vec<NavigationEntry>,
    active: Option<AnchorId>,
    on_select: EventHandler<AnchorId>,
) -> Element {
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "table-of-contents",
            h2 { class: "toc-title", "Contents" }
            ul {
                for entry in entries.iter() {
                    li {
                        key: "{entry.anchor}",
                        class: entry_class(entry, active),
                        a {
                            href: "#{entry.anchor}",
                            onclick: {
                                let anchor = entry.anchor;
                                move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    on_select.call(anchor);
                                }
                            },
                            "{entry.title}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use rstest::rstest;

    fn entry(anchor: usize, level: u8, title: &str) -> NavigationEntry {
        NavigationEntry {
            anchor: AnchorId(anchor),
            title: title.to_string(),
            level,
        }
    }

    #[component]
    fn Fixture(entries: Vec<NavigationEntry>, active: Option<AnchorId>) -> Element {
        rsx! {
            TableOfContents {
                entries,
                active,
                on_select: move |_| {},
            }
        }
    }

    fn render_toc(entries: Vec<NavigationEntry>, active: Option<AnchorId>) -> String {
        let mut dom = VirtualDom::new_with_props(Fixture, FixtureProps { entries, active });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[rstest]
    #[case(1, "toc-level-1")]
    #[case(2, "toc-level-2")]
    #[case(3, "toc-level-3")]
    #[case(6, "toc-level-3")]
    fn indentation_by_level(#[case] level: u8, #[case] class: &str) {
        assert_eq!(indent_class(level), class);
    }

    #[test]
    fn empty_list_renders_nothing() {
        let html = render_toc(vec![], None);
        assert!(!html.contains("table-of-contents"));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn marks_only_the_active_entry() {
        let html = render_toc(
            vec![entry(0, 1, "Intro"), entry(1, 2, "Setup"), entry(2, 3, "Details")],
            Some(AnchorId(1)),
        );

        assert_eq!(html.matches(" active").count(), 1);
        assert!(html.contains(r#"class="toc-entry toc-level-2 active""#));
        assert!(html.contains(r##"href="#heading-0""##));
        assert!(html.contains("Details"));
    }

    #[test]
    fn nothing_active_before_first_computation() {
        let html = render_toc(vec![entry(0, 1, "Intro")], None);
        assert!(!html.contains("active"));
        assert!(html.contains(r#"class="toc-entry toc-level-1""#));
    }
}
