use api_client::HrmsClient;
use dioxus::prelude::*;
use shared_types::{Role, SeedUserRequest};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Form, FormSelect, Input};

/// Development convenience: create a demo user of a chosen role.
///
/// Independent of the session; the seed endpoint needs no auth. The server's
/// response message and created id are echoed verbatim.
#[component]
pub fn Seeder() -> Element {
    let mut role = use_signal(|| Role::Hr.as_str().to_string());
    let mut email = use_signal(|| "hr@example.com".to_string());
    let mut full_name = use_signal(|| "Alex HR".to_string());
    let mut password = use_signal(|| "password".to_string());
    let mut message = use_signal(String::new);
    let mut seeding = use_signal(|| false);

    let handle_seed = move |_: FormEvent| {
        if seeding() {
            return;
        }
        seeding.set(true);
        message.set(String::new());

        let client = HrmsClient::new(crate::backend_url());
        let req = SeedUserRequest {
            email: email(),
            full_name: full_name(),
            role: role(),
            password: password(),
        };
        spawn(async move {
            match client.seed_user(&req).await {
                Ok(resp) => {
                    message.set(format!("{} ({})", resp.message, resp.id.unwrap_or_default()));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "seed user failed");
                    message.set(e.message);
                }
            }
            seeding.set(false);
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Seed a demo user" }
            }
            CardContent {
                Form { onsubmit: handle_seed,
                    div { class: "form-row",
                        FormSelect {
                            value: role(),
                            onchange: move |e: FormEvent| role.set(e.value()),
                            for r in Role::ALL.iter() {
                                option { value: r.as_str(), "{r.as_str()}" }
                            }
                        }
                        Input {
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                    }
                    div { class: "form-row",
                        Input {
                            value: full_name(),
                            on_input: move |e: FormEvent| full_name.set(e.value()),
                        }
                        Input {
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "button",
                        "data-style": "secondary",
                        disabled: seeding(),
                        if seeding() { "Seeding..." } else { "Seed user" }
                    }
                }
                if !message().is_empty() {
                    p { class: "hint", "{message}" }
                }
            }
        }
    }
}
