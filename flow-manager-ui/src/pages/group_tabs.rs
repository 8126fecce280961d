use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use multicast::{
    GroupTab, GroupTabs, MulticastGroupView, Notice, SubmitOutcome, ViewPhase, timer_millis,
};

use crate::widgets::empty_state::EmptyState;
use crate::widgets::node_options::NodeOptions;
use crate::widgets::snackbar::{Snackbar, use_snackbar};
use crate::widgets::tabs::{TabItem, Tabs};

/// Reports a submit to the operator and reloads the view once it was accepted.
pub async fn settle(
    outcome: SubmitOutcome,
    snackbar: Snackbar,
    mut phase: Signal<ViewPhase>,
    on_reload: EventHandler<()>,
) {
    snackbar.show(outcome.message());
    phase.set(ViewPhase::after(&outcome));
    if let Some(delay) = outcome.reload_after() {
        TimeoutFuture::new(timer_millis(delay)).await;
        on_reload.call(());
    }
}

/// The `#main2` tab region: one tab per source, first one active.
#[component]
pub fn GroupTabsPanel(
    tabs: GroupTabs,
    editable: bool,
    phase: Signal<ViewPhase>,
    on_reload: EventHandler<()>,
) -> Element {
    let sources = tabs.sources();
    let mut active = use_signal(|| sources.first().copied());
    let active_tab = active().map(|src| src.to_string()).unwrap_or_default();
    let on_tab_change = move |id: String| active.set(id.parse().ok());

    let body = match &tabs {
        GroupTabs::Unavailable => rsx! {},
        _ if tabs.is_empty() => rsx! {
            EmptyState {
                title: Notice::NoGroups.to_string(),
                description: "The controller reports no multicast groups. Add one above or refresh.".to_string(),
                on_refresh: Some(EventHandler::new(move |_| on_reload.call(()))),
            }
        },
        GroupTabs::Skeleton(sources) => {
            let items = sources
                .iter()
                .map(|src| TabItem {
                    id: src.to_string(),
                    label: src.to_string(),
                    members: None,
                })
                .collect::<Vec<_>>();
            rsx! {
                Tabs { items, active_tab, on_tab_change }
            }
        }
        GroupTabs::Populated(list) => {
            let items = list
                .iter()
                .map(|tab| TabItem {
                    id: tab.label(),
                    label: tab.label(),
                    members: Some(tab.initial_selection().len()),
                })
                .collect::<Vec<_>>();
            let panels = list.iter().map(|tab| {
                let hidden = active() != Some(tab.source);
                rsx! {
                    div { key: "{tab.source}", class: "tab-panel", hidden,
                        ModGroupForm { tab: tab.clone(), editable, phase, on_reload }
                    }
                }
            });
            rsx! {
                Tabs { items, active_tab, on_tab_change }
                div { class: "tab-content", {panels} }
            }
        }
    };

    rsx! {
        div { id: "main2", {body} }
    }
}

/// Destination checkboxes for one source, pre-checked with its current group.
#[component]
pub fn ModGroupForm(
    tab: GroupTab,
    editable: bool,
    phase: Signal<ViewPhase>,
    on_reload: EventHandler<()>,
) -> Element {
    let view = use_context::<MulticastGroupView>();
    let snackbar = use_snackbar();
    let initial = tab.initial_selection();
    let mut destinations = use_signal(|| initial.clone());
    let src = tab.source;

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if !phase.peek().accepts_submit() {
            return;
        }
        let mut phase = phase;
        phase.set(ViewPhase::Submitting);
        let view = view.clone();
        let selected = destinations();
        spawn(async move {
            let outcome = view.submit_group_mod(src, selected).await;
            settle(outcome, snackbar, phase, on_reload).await;
        });
    };

    if !editable {
        return rsx! {
            fieldset { class: "readonly-group",
                legend { "Destination nodes" }
                NodeOptions { container: tab.destinations.clone(), selected: destinations, disabled: true }
            }
        };
    }

    rsx! {
        form { id: "{tab.form_id}", onsubmit: onsubmit,
            fieldset {
                legend { "Update destination nodes" }
                NodeOptions { container: tab.destinations.clone(), selected: destinations }
            }
            div { class: "formcontrol",
                input {
                    r#type: "submit",
                    value: "Submit",
                    disabled: !phase().accepts_submit(),
                }
                input {
                    r#type: "button",
                    value: "Clear",
                    onclick: move |_| destinations.set(initial.clone()),
                }
            }
        }
    }
}
