use dioxus::prelude::*;

#[component]
pub fn Welcome(article_count: usize) -> Element {
    rsx! {
        div {
            class: "welcome",
            h1 { "Lectern" }
            match article_count {
                0 => rsx! { p { "Add some .md files to your articles folder to get started." } },
                1 => rsx! { p { "1 article available. Pick it from the list to start reading." } },
                n => rsx! { p { "{n} articles available. Pick one from the list to start reading." } },
            }
        }
    }
}
