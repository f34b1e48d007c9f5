use crate::ui::components::{
    ArticleHeader, DocumentContent, EmptyDocument, TableOfContents, ToastNotice,
};
use crate::ui::scroll::DomLayout;
use dioxus::prelude::*;
use lectern_engine::{AnchorId, OpenArticle, Toast, TrackerTiming, scroll_tracker};
use std::time::Instant;

/// One open article: scrollable content, its table of contents and the
/// tracker that keeps the two in sync.
///
/// Mount one per open, keyed by path and open count. The tracker task
/// belongs to this component, so unmounting it cancels every pending timer.
#[component]
pub fn ArticleView(open: OpenArticle, timing: TrackerTiming, on_close: Callback<()>) -> Element {
    let layout = use_hook(DomLayout::default);
    let active = use_signal(|| None::<AnchorId>);
    let mut toast = use_signal(|| None::<Toast>);

    let tracker = use_hook({
        let anchors = open.anchors();
        let layout = layout.clone();
        move || {
            let (handle, tracker) = scroll_tracker(anchors, timing);
            let mut active = active;
            spawn(tracker.run(layout, move |anchor| active.set(Some(anchor))));
            handle
        }
    });

    let container_layout = layout.clone();
    let toc_layout = layout.clone();
    let toast_visible = toast
        .read()
        .is_some_and(|shown| shown.is_visible(Instant::now()));

    rsx! {
        div {
            class: "article-view",
            div {
                class: "article-scroll",
                onmounted: move |evt: MountedEvent| container_layout.set_container(evt.data()),
                onscroll: move |_| tracker.notify_scroll(),
                ArticleHeader {
                    article: open.article.clone(),
                    read_time_minutes: open.read_time_minutes,
                    on_close,
                }
                if open.blocks.is_empty() {
                    EmptyDocument {}
                } else {
                    DocumentContent {
                        blocks: open.blocks.clone(),
                        layout,
                        on_copied: move |_| {
                            let shown = Toast::show(Instant::now());
                            toast.set(Some(shown));
                            spawn(async move {
                                tokio::time::sleep(Toast::DURATION).await;
                                if *toast.peek() == Some(shown) {
                                    toast.set(None);
                                }
                            });
                        },
                    }
                }
            }
            aside {
                class: "toc-panel",
                TableOfContents {
                    entries: open.navigation.clone(),
                    active: *active.read(),
                    on_select: move |anchor: AnchorId| {
                        let layout = toc_layout.clone();
                        spawn(async move { layout.scroll_to(anchor).await });
                    },
                }
            }
            if toast_visible {
                ToastNotice { message: "Copied to clipboard" }
            }
        }
    }
}
