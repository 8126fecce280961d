use dioxus::prelude::*;
use multicast::{NodeId, OptionContainer};

/// Renders one labeled input per node in `container` and keeps `selected` in sync.
///
/// The whole list is derived from `container`, so a smaller node set on the
/// next load leaves nothing behind.
#[component]
pub fn NodeOptions(
    container: OptionContainer,
    selected: Signal<Vec<NodeId>>,
    #[props(default)] disabled: bool,
) -> Element {
    let input_type = container.kind.to_string();

    let items = container.options.iter().map(|option| {
        let value = option.value;
        let input_id = container.input_id(value);
        let is_checked = selected.read().contains(&value);
        let item_class = if is_checked { "checkbox-item selected" } else { "checkbox-item" };
        let name = container.id.clone();
        let container = container.clone();
        rsx! {
            div { key: "{value}", class: item_class,
                input {
                    r#type: "{input_type}",
                    id: "{input_id}",
                    name: "{name}",
                    value: "{value}",
                    checked: is_checked,
                    disabled,
                    onchange: move |_| {
                        let mut selected = selected;
                        let next = container.toggled(&selected.peek(), value);
                        selected.set(next);
                    },
                }
                label { r#for: "{input_id}", "{value}" }
            }
        }
    });

    rsx! {
        div { id: "{container.id}", class: "option-container", {items} }
    }
}
