use crate::ui::scroll::DomLayout;
use dioxus::prelude::*;
use lectern_engine::AnchorId;

#[component]
pub fn Heading(anchor: AnchorId, level: u8, text: String, layout: DomLayout) -> Element {
    let id = anchor.to_string();
    let class_name = format!("heading level-{level}");
    let onmounted = move |evt: MountedEvent| layout.register_heading(anchor, evt.data());

    match level {
        1 => rsx! { h1 { id: "{id}", class: "{class_name}", onmounted, "{text}" } },
        2 => rsx! { h2 { id: "{id}", class: "{class_name}", onmounted, "{text}" } },
        _ => rsx! { h3 { id: "{id}", class: "{class_name}", onmounted, "{text}" } },
    }
}
