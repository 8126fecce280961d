use dioxus::prelude::*;
use multicast::{AddGroupForm, FormSelection, MulticastGroupView, ViewPhase, ViewSnapshot};

use crate::pages::group_tabs::{GroupTabsPanel, settle};
use crate::widgets::node_options::NodeOptions;
use crate::widgets::page_header::PageHeader;
use crate::widgets::snackbar::use_snackbar;

/// Editable console: add form on top, one modify form per source below.
#[component]
pub fn MulticastGroups() -> Element {
    let view = use_context::<MulticastGroupView>();
    let mut generation = use_signal(|| 0u64);
    let mut phase = use_signal(|| ViewPhase::Rendering);

    let snapshot = use_resource(move || {
        let view = view.clone();
        let current = generation();
        async move {
            let snapshot = view.load().await;
            phase.set(ViewPhase::Idle);
            (current, snapshot)
        }
    });

    let mut reload = move || {
        phase.set(ViewPhase::Rendering);
        let next = generation.peek().wrapping_add(1);
        generation.set(next);
    };

    let loaded = snapshot.read().clone();

    rsx! {
        div { class: "page-container",
            PageHeader {
                title: "Multicast Groups".to_string(),
                busy: phase() != ViewPhase::Idle,
                on_refresh: move |_| reload(),
            }
            if loaded.is_none() {
                p { class: "page-content", "Loading multicast groups..." }
            }
            // keyed by generation so a reload drops every form of the previous render
            for (current, snapshot) in loaded {
                GroupConsole {
                    key: "{current}",
                    snapshot,
                    phase,
                    on_reload: move |_| reload(),
                }
            }
        }
    }
}

#[component]
fn GroupConsole(
    snapshot: ViewSnapshot,
    phase: Signal<ViewPhase>,
    on_reload: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "group-add",
            h2 { "Add multicast group" }
            if let Some(form) = snapshot.add_form.clone() {
                AddGroupFormView { form, phase, on_reload }
            }
        }
        section { class: "group-list",
            h2 { "Current multicast groups" }
            GroupTabsPanel { tabs: snapshot.tabs.clone(), editable: true, phase, on_reload }
        }
    }
}

#[component]
fn AddGroupFormView(
    form: AddGroupForm,
    phase: Signal<ViewPhase>,
    on_reload: EventHandler<()>,
) -> Element {
    let view = use_context::<MulticastGroupView>();
    let snackbar = use_snackbar();
    let mut sources = use_signal(Vec::new);
    let mut destinations = use_signal(Vec::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if !phase.peek().accepts_submit() {
            return;
        }
        let mut phase = phase;
        phase.set(ViewPhase::Submitting);
        let view = view.clone();
        let selection = FormSelection::new(sources(), destinations());
        spawn(async move {
            let outcome = view.submit_group_add(selection).await;
            settle(outcome, snackbar, phase, on_reload).await;
        });
    };

    rsx! {
        form { id: "{form.form_id}", onsubmit: onsubmit,
            fieldset {
                legend { "Source node" }
                NodeOptions { container: form.sources.clone(), selected: sources }
            }
            fieldset {
                legend { "Destination nodes" }
                NodeOptions { container: form.destinations.clone(), selected: destinations }
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
                    onclick: move |_| {
                        sources.set(Vec::new());
                        destinations.set(Vec::new());
                    },
                }
            }
        }
    }
}
