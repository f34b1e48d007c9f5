use dioxus::prelude::*;

#[component]
pub fn ToastNotice(message: String) -> Element {
    rsx! {
        div { class: "toast", role: "status", "{message}" }
    }
}
