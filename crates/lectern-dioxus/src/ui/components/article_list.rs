use crate::ui::components::ArticleListItem;
use dioxus::events::{Key, KeyboardEvent};
use dioxus::prelude::*;
use lectern_engine::Article;

#[component]
pub fn ArticleList(
    articles: Vec<Article>,
    selected: Option<Article>,
    on_select: EventHandler<Article>,
) -> Element {
    let mut focused_index = use_signal(|| 0usize);
    let mut has_focus = use_signal(|| false);

    // Keep keyboard focus on the selected article
    {
        let articles = articles.clone();
        let selected = selected.clone();
        use_effect(move || {
            if let Some(ref selected) = selected
                && let Some(index) = articles.iter().position(|a| a == selected)
            {
                focused_index.set(index);
            }
        });
    }

    let handle_keydown = {
        let articles = articles.clone();
        move |evt: KeyboardEvent| {
            handle_list_navigation(
                evt,
                *has_focus.read(),
                &articles,
                &mut focused_index,
                &on_select,
            );
        }
    };

    rsx! {
        div {
            class: "article-list",
            tabindex: "0",
            onkeydown: handle_keydown,
            onfocus: move |_| has_focus.set(true),
            onblur: move |_| has_focus.set(false),
            if articles.is_empty() {
                p { class: "article-list-empty", "No articles found." }
            }
            for (index, article) in articles.iter().enumerate() {
                ArticleListItem {
                    key: "{index}",
                    article: article.clone(),
                    is_selected: selected.as_ref() == Some(article),
                    is_focused: index == *focused_index.read() && *has_focus.read(),
                    on_select,
                }
            }
        }
    }
}

/// Arrow keys move through the list and open the article they land on
fn handle_list_navigation(
    evt: KeyboardEvent,
    has_focus: bool,
    articles: &[Article],
    focused_index: &mut Signal<usize>,
    on_select: &EventHandler<Article>,
) {
    if !has_focus || articles.is_empty() {
        return;
    }

    let current_index = *focused_index.read();
    let new_index = match evt.key() {
        Key::ArrowDown => (current_index + 1).min(articles.len() - 1),
        Key::ArrowUp => current_index.saturating_sub(1),
        Key::Enter => current_index.min(articles.len() - 1),
        _ => return,
    };

    evt.prevent_default();
    focused_index.set(new_index);
    on_select.call(articles[new_index].clone());
}
