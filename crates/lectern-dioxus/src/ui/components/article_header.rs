use dioxus::prelude::*;
use lectern_engine::Article;

#[component]
pub fn ArticleHeader(article: Article, read_time_minutes: usize, on_close: Callback<()>) -> Element {
    let title = article.display_name();
    let path = article.display_path();

    rsx! {
        header {
            class: "article-header",
            button {
                class: "back-button",
                onclick: move |_| on_close.call(()),
                "← All articles"
            }
            h1 { class: "article-title", "{title}" }
            div {
                class: "article-meta",
                span { class: "article-path", "{path}" }
                span { class: "read-time", "{read_time_minutes} min read" }
            }
            hr {}
        }
    }
}
