use dioxus::prelude::*;

#[component]
pub fn PageHeader(title: String, busy: bool, on_refresh: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "page-header",
            h1 { "{title}" }
            div { class: "header-actions",
                if busy {
                    span { class: "status-dot loading" }
                }
                button {
                    r#type: "button",
                    name: "refresh",
                    class: "button",
                    onclick: move |e| on_refresh.call(e),
                    "Refresh"
                }
            }
        }
    }
}
