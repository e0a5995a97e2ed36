use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::Notification;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Skeleton};

/// Read-only list of the current user's notifications.
///
/// Fetched once on mount; no mark-as-read, no pagination, no refresh.
#[component]
pub fn NotificationsView() -> Element {
    let session = use_session();

    let items = use_resource(move || {
        let client = session.client();
        async move { client.list_notifications().await }
    });

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Notifications" }
            }
            CardContent {
                match &*items.read() {
                    Some(Ok(notifications)) => rsx! {
                        NotificationList { notifications: notifications.clone() }
                    },
                    Some(Err(e)) => rsx! {
                        p { class: "fetch-error", "Could not load notifications: {e.message}" }
                    },
                    None => rsx! {
                        Skeleton {}
                    },
                }
            }
        }
    }
}

#[component]
pub fn NotificationList(notifications: Vec<Notification>) -> Element {
    rsx! {
        ul { class: "notification-list",
            for item in notifications {
                li { key: "{item.id}", class: "notification-entry",
                    div { class: "notification-title", "{item.title}" }
                    div { class: "notification-message", "{item.message}" }
                }
            }
        }
    }
}
