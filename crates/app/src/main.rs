use dioxus::prelude::*;

mod session;
mod views;

use session::{use_session, SessionStore};
use shared_ui::{PageActions, PageHeader, PageTitle};
use views::{
    panel_for_role, EmployeePanel, HrPanel, Login, ManagerPanel, NotificationsView, PanelKind,
    Seeder, UnknownRole,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Backend base URL, fixed at compile time via `HRMS_BACKEND_URL`.
pub fn backend_url() -> &'static str {
    option_env!("HRMS_BACKEND_URL").unwrap_or("http://localhost:8000")
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SessionStore::new);
    let session = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "page",
            Header {}
            if session.is_authenticated() {
                AuthenticatedLayout {}
            } else {
                div { class: "grid-two",
                    Login {}
                    Seeder {}
                }
            }
        }
    }
}

/// Top bar: app name plus the signed-in identity, if any.
#[component]
fn Header() -> Element {
    let session = use_session();
    let identity = session
        .current
        .read()
        .as_ref()
        .map(|u| format!("Signed in as {} ({})", u.full_name, u.role));

    rsx! {
        PageHeader {
            PageTitle { "HRMS" }
            PageActions {
                match identity {
                    Some(line) => rsx! {
                        span { class: "header-identity", "{line}" }
                    },
                    None => rsx! {
                        span { class: "header-identity", "Please sign in" }
                    },
                }
            }
        }
    }
}

/// Authenticated layout: exactly one role panel plus the notifications column.
#[component]
fn AuthenticatedLayout() -> Element {
    let session = use_session();
    let role = session
        .current
        .read()
        .as_ref()
        .map(|u| u.role.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "grid-main",
            div { class: "panel-column",
                match panel_for_role(&role) {
                    PanelKind::Hr => rsx! { HrPanel {} },
                    PanelKind::Manager => rsx! { ManagerPanel {} },
                    PanelKind::Employee => rsx! { EmployeePanel {} },
                    PanelKind::Unknown => rsx! { UnknownRole { role } },
                }
            }
            div { class: "side-column",
                NotificationsView {}
            }
        }
    }
}
