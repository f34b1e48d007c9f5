use dioxus::prelude::*;
use lectern_engine::Article;

#[component]
pub fn ArticleListItem(
    article: Article,
    is_selected: bool,
    is_focused: bool,
    on_select: EventHandler<Article>,
) -> Element {
    let classes = match (is_selected, is_focused) {
        (true, true) => "article-item selected focused",
        (true, false) => "article-item selected",
        (false, true) => "article-item focused",
        (false, false) => "article-item",
    };
    let name = article.display_name().to_string();
    let path = article.display_path().to_string();

    rsx! {
        div {
            class: "{classes}",
            title: "{path}",
            onclick: move |_| on_select.call(article.clone()),
            span { class: "article-name", "{name}" }
            if path != name {
                span { class: "article-item-path", "{path}" }
            }
        }
    }
}
