use dioxus::prelude::*;
use multicast::{MulticastGroupView, ViewPhase};

use crate::pages::group_tabs::GroupTabsPanel;
use crate::widgets::page_header::PageHeader;

/// Read-only listing of the current groups.
#[component]
pub fn MulticastTables() -> Element {
    let view = use_context::<MulticastGroupView>();
    let mut generation = use_signal(|| 0u64);
    let mut phase = use_signal(|| ViewPhase::Rendering);

    let tabs = use_resource(move || {
        let view = view.clone();
        let current = generation();
        async move {
            let tabs = view.load_group_tabs().await;
            phase.set(ViewPhase::Idle);
            (current, tabs)
        }
    });

    let mut reload = move || {
        phase.set(ViewPhase::Rendering);
        let next = generation.peek().wrapping_add(1);
        generation.set(next);
    };

    let loaded = tabs.read().clone();

    rsx! {
        div { class: "page-container",
            PageHeader {
                title: "Multicast Group Tables".to_string(),
                busy: phase() != ViewPhase::Idle,
                on_refresh: move |_| reload(),
            }
            for (current, tabs) in loaded {
                GroupTabsPanel {
                    key: "{current}",
                    tabs,
                    editable: false,
                    phase,
                    on_reload: move |_| reload(),
                }
            }
        }
    }
}
