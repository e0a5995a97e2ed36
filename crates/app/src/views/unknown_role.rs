use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Explicit state for a session whose role matches no known panel.
#[component]
pub fn UnknownRole(role: String) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Unknown role" }
                CardDescription { "This account has no panel assigned." }
            }
            CardContent {
                p { "The server reported the role \"{role}\", which this application does not recognise." }
            }
        }
    }
}
