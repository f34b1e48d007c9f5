use crate::ui::components::{ArticleList, ArticleView, ErrorScreen, Welcome};
use dioxus::prelude::*;
use lectern_config::Config;
use lectern_engine::{Article, OpenArticle, io};

const READER_CSS: &str = include_str!("../assets/reader.css");

#[component]
pub fn App(config: Config) -> Element {
    let articles_path = config.articles_path.clone();
    let articles = use_hook({
        let articles_path = articles_path.clone();
        move || io::scan_articles(&articles_path).map_err(|e| e.to_string())
    });
    let mut current = use_signal(|| None::<OpenArticle>);
    let mut opens = use_signal(|| 0usize);

    let articles = match articles {
        Ok(articles) => articles,
        Err(message) => {
            log::error!("Error scanning articles: {message}");
            return rsx! {
                style { {READER_CSS} }
                ErrorScreen {
                    title: "Cannot open articles",
                    message,
                    details: Some(articles_path.display().to_string()),
                }
            };
        }
    };

    let mode = config.reader.navigation;
    let timing = config.tracking.timing();
    let open_article = move |article: Article| {
        match io::read_article(article.relative_path(), &articles_path) {
            Ok(source) => {
                let open = OpenArticle::load(article, &source, mode);
                log::info!(
                    "Opened {} ({} headings)",
                    open.article.display_path(),
                    open.navigation.len()
                );
                *opens.write() += 1;
                current.set(Some(open));
            }
            Err(e) => {
                log::error!("Error reading article {}: {e}", article.display_path());
            }
        }
    };

    let open_view = current
        .read()
        .clone()
        .map(|open| (article_view_key(&open, *opens.read()), open));
    let selected = open_view.as_ref().map(|(_, open)| open.article.clone());
    let article_count = articles.len();

    rsx! {
        style { {READER_CSS} }
        div {
            class: "app-container",
            div {
                class: "sidebar",
                h2 { "Articles" }
                ArticleList {
                    articles,
                    selected,
                    on_select: open_article,
                }
            }
            div {
                class: "main-content",
                if let Some((view_key, open)) = open_view {
                    ArticleView {
                        key: "{view_key}",
                        open,
                        timing,
                        on_close: move |_| current.set(None),
                    }
                } else {
                    Welcome { article_count }
                }
            }
        }
    }
}

/// Every open mounts a fresh view, even for the article already shown, so
/// its tracker and layout registrations never outlive the document.
fn article_view_key(open: &OpenArticle, generation: usize) -> String {
    format!("{}#{generation}", open.article.display_path())
}
