use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct TabItem {
    pub id: String,
    pub label: String,
    /// Destination count, unknown until the tab content has loaded.
    pub members: Option<usize>,
}

#[component]
pub fn Tabs(items: Vec<TabItem>, active_tab: String, on_tab_change: EventHandler<String>) -> Element {
    let buttons = items.into_iter().map(|item| {
        let class = if item.id == active_tab { "tab active" } else { "tab" };
        let id = item.id.clone();
        rsx! {
            button {
                key: "{item.id}",
                r#type: "button",
                role: "tab",
                class,
                onclick: move |_| on_tab_change.call(id.clone()),
                "{item.label}"
                if let Some(members) = item.members {
                    span { class: "tab-count", " {members}" }
                }
            }
        }
    });

    rsx! {
        div { class: "tabs", role: "tablist", {buttons} }
    }
}
