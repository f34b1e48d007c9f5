use dioxus::prelude::*;

#[component]
pub fn EmptyDocument() -> Element {
    rsx! {
        div {
            class: "empty-document",
            p { "This article is empty." }
        }
    }
}
