use crate::Route;
use dioxus::prelude::*;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, EnumIter, Display)]
enum Section {
    #[strum(to_string = "Multicast Groups")]
    Groups,
    #[strum(to_string = "Group Tables")]
    Tables,
}

impl Section {
    fn route(self) -> Route {
        match self {
            Section::Groups => Route::MulticastGroups {},
            Section::Tables => Route::MulticastTables {},
        }
    }
}

#[component]
pub fn Sidebar() -> Element {
    let current = use_route::<Route>();

    let links = Section::iter().map(|section| {
        let route = section.route();
        let class = if route == current { "nav-item active" } else { "nav-item" };
        rsx! {
            Link { key: "{section}", to: route, class, "{section}" }
        }
    });

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-header",
                h2 { "Flow Manager" }
            }
            nav { class: "sidebar-nav", {links} }
        }
    }
}
