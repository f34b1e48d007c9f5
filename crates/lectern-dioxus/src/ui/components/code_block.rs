use crate::ui::clipboard::WebviewClipboard;
use crate::ui::highlight::highlight_code;
use dioxus::prelude::*;
use lectern_engine::copy_code;

#[component]
pub fn CodeBlock(language: String, code: String, on_copied: Callback<()>) -> Element {
    let code_class = format!("language-{language}");
    let highlighted = highlight_code(&language, &code);

    let copy = move |_| {
        let code = code.clone();
        spawn(async move {
            if copy_code(&WebviewClipboard, &code).await.is_ok() {
                on_copied.call(());
            }
        });
    };

    rsx! {
        div {
            class: "code-block",
            div {
                class: "code-block-header",
                span { class: "code-language", "{language}" }
                button {
                    class: "copy-button",
                    title: "Copy code",
                    onclick: copy,
                    "Copy"
                }
            }
            pre {
                code {
                    class: "{code_class}",
                    dangerous_inner_html: "{highlighted}"
                }
            }
        }
    }
}
