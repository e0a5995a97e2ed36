use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::{LeaveAction, LeaveRequest};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Skeleton};

/// Manager panel: pending leave requests with approve/reject actions.
///
/// No optimistic removal: an acted-on item disappears only once the reload
/// no longer reports it as pending.
#[component]
pub fn ManagerPanel() -> Element {
    let session = use_session();

    // id of the request whose action is in flight
    let mut acting = use_signal(|| Option::<String>::None);

    let mut pending = use_resource(move || {
        let client = session.client();
        async move { client.list_pending_leaves().await }
    });

    let handle_action = move |(id, action): (String, LeaveAction)| {
        if acting().is_some() {
            return;
        }
        acting.set(Some(id.clone()));

        let client = session.client();
        spawn(async move {
            if let Err(e) = client.leave_action(&id, action).await {
                tracing::warn!(error = %e, leave_id = %id, "leave action failed");
            }
            acting.set(None);
            pending.restart();
        });
    };

    rsx! {
        div { class: "panel",
            Card {
                CardHeader {
                    CardTitle { "Pending Approvals" }
                }
                CardContent {
                    match &*pending.read() {
                        Some(Ok(entries)) => rsx! {
                            PendingLeaveList {
                                entries: entries.clone(),
                                acting: acting(),
                                on_action: handle_action,
                            }
                        },
                        Some(Err(e)) => rsx! {
                            p { class: "fetch-error", "Could not load pending requests: {e.message}" }
                        },
                        None => rsx! {
                            Skeleton {}
                        },
                    }
                }
            }
        }
    }
}

/// Pending requests with per-row Approve/Reject buttons; both buttons of a
/// row are disabled while that row's action is in flight.
#[component]
pub fn PendingLeaveList(
    entries: Vec<LeaveRequest>,
    acting: Option<String>,
    on_action: EventHandler<(String, LeaveAction)>,
) -> Element {
    rsx! {
        ul { class: "leave-list",
            for entry in entries {
                li { key: "{entry.id}", class: "leave-entry",
                    div { class: "leave-entry-details",
                        div { class: "leave-entry-title",
                            "{entry.leave_type} • {entry.start_date} → {entry.end_date}"
                        }
                        div { class: "leave-entry-reason",
                            "Reason: {reason_label(&entry.reason)}"
                        }
                    }
                    div { class: "leave-entry-actions",
                        Button {
                            disabled: acting.as_deref() == Some(entry.id.as_str()),
                            onclick: {
                                let id = entry.id.clone();
                                move |_| on_action.call((id.clone(), LeaveAction::Approve))
                            },
                            "Approve"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            disabled: acting.as_deref() == Some(entry.id.as_str()),
                            onclick: {
                                let id = entry.id.clone();
                                move |_| on_action.call((id.clone(), LeaveAction::Reject))
                            },
                            "Reject"
                        }
                    }
                }
            }
        }
    }
}

fn reason_label(reason: &str) -> &str {
    if reason.is_empty() {
        "-"
    } else {
        reason
    }
}
