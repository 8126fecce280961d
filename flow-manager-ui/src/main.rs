use std::rc::Rc;

use dioxus::prelude::*;
use multicast::MulticastGroupView;
use shared::config::Config;

mod api;
mod pages;
mod widgets;

use crate::api::ApiClient;
use pages::{MulticastGroups, MulticastTables};
use widgets::sidebar::Sidebar;
use widgets::snackbar::SnackbarProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    MulticastGroups {},
    #[route("/tables")]
    MulticastTables {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    let dotenv = dotenvy::dotenv();
    let config = Config::from_env();

    if let Err(e) = dioxus::logger::init(config.log_level) {
        eprintln!("Logger already initialised: {e}");
    }

    match dotenv {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }
    info!("Using controller at {}", config.controller_url);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<Config>();
    use_context_provider(move || MulticastGroupView::new(Rc::new(ApiClient::new(config))));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SnackbarProvider { Router::<Route> {} }
    }
}

/// Sidebar plus the routed page.
#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app-shell",
            Sidebar {}
            main { class: "app-content", Outlet::<Route> {} }
        }
    }
}
