use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::{CreateLeaveRequest, LeaveRequest, LeaveStatus, LeaveType};
use shared_ui::{
    Badge, BadgeVariant, Button, Card, CardContent, CardHeader, CardTitle, Form, FormSelect,
    Input, Skeleton,
};

/// Employee panel: submit a leave request and view own history.
#[component]
pub fn EmployeePanel() -> Element {
    let session = use_session();

    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut leave_type = use_signal(|| LeaveType::Annual.as_str().to_string());
    let mut reason = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let mut history = use_resource(move || {
        let client = session.client();
        async move { client.list_leaves().await }
    });

    let handle_submit = move |_: FormEvent| {
        if submitting() {
            return;
        }
        submitting.set(true);

        let client = session.client();
        let req = CreateLeaveRequest {
            start_date: start_date(),
            end_date: end_date(),
            leave_type: leave_type(),
            reason: reason(),
        };
        spawn(async move {
            if let Err(e) = client.submit_leave(&req).await {
                tracing::warn!(error = %e, "submit leave failed");
            }
            start_date.set(String::new());
            end_date.set(String::new());
            reason.set(String::new());
            leave_type.set(LeaveType::Annual.as_str().to_string());
            submitting.set(false);
            history.restart();
        });
    };

    rsx! {
        div { class: "panel",
            Card {
                CardHeader {
                    CardTitle { "Request Leave" }
                }
                CardContent {
                    Form { onsubmit: handle_submit,
                        div { class: "form-row",
                            Input {
                                input_type: "date",
                                value: start_date(),
                                on_input: move |e: FormEvent| start_date.set(e.value()),
                            }
                            Input {
                                input_type: "date",
                                value: end_date(),
                                on_input: move |e: FormEvent| end_date.set(e.value()),
                            }
                            FormSelect {
                                value: leave_type(),
                                onchange: move |e: FormEvent| leave_type.set(e.value()),
                                for t in LeaveType::ALL.iter() {
                                    option { value: t.as_str(), "{t.as_str()}" }
                                }
                            }
                            Input {
                                placeholder: "Reason",
                                value: reason(),
                                on_input: move |e: FormEvent| reason.set(e.value()),
                            }
                        }
                        Button { disabled: submitting(), "Submit" }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "My Leave History" }
                }
                CardContent {
                    match &*history.read() {
                        Some(Ok(entries)) => rsx! {
                            LeaveHistoryList { entries: entries.clone() }
                        },
                        Some(Err(e)) => rsx! {
                            p { class: "fetch-error", "Could not load leave history: {e.message}" }
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

/// History entries: type and date range, with the status string passed
/// through verbatim in one of three visual states.
#[component]
pub fn LeaveHistoryList(entries: Vec<LeaveRequest>) -> Element {
    rsx! {
        ul { class: "leave-list",
            for entry in entries {
                li { key: "{entry.id}", class: "leave-entry",
                    span { "{entry.leave_type} • {entry.start_date} → {entry.end_date}" }
                    Badge { variant: status_variant(&entry.status), "{entry.status}" }
                }
            }
        }
    }
}

/// Badge variant for a leave status string; unrecognised values render as
/// pending.
pub fn status_variant(status: &str) -> BadgeVariant {
    match LeaveStatus::from_str_or_default(status) {
        LeaveStatus::Approved => BadgeVariant::Success,
        LeaveStatus::Rejected => BadgeVariant::Destructive,
        LeaveStatus::Pending => BadgeVariant::Warning,
    }
}
