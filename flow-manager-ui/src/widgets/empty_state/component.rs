use dioxus::prelude::*;

/// Placeholder for a region with nothing to list, optionally offering a refresh.
#[component]
pub fn EmptyState(
    title: String,
    description: String,
    on_refresh: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        div { class: "empty-state",
            h3 { class: "empty-title", "{title}" }
            p { class: "empty-description", "{description}" }
            if let Some(handler) = on_refresh {
                button {
                    r#type: "button",
                    class: "button",
                    onclick: move |e| handler.call(e),
                    "Refresh"
                }
            }
        }
    }
}
