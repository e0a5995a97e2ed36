use crate::session::use_session;
use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label, Separator,
};

/// Email/password sign-in form.
///
/// No client-side validation: empty strings are submitted as-is and the
/// backend decides. The only surfaced failure is the propagated login error.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        let client = session.client();
        if let Err(e) = session.login(&client, email(), password()).await {
            error_msg.set(Some(e.message));
        }
        loading.set(false);
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Sign in" }
                CardDescription { "Enter your credentials to access your panel" }
            }
            CardContent {
                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }
                form { onsubmit: handle_login,
                    div { class: "auth-field",
                        Label { html_for: "email", "Email" }
                        Input {
                            id: "email",
                            placeholder: "Email",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                    }
                    div { class: "auth-field",
                        Label { html_for: "password", "Password" }
                        Input {
                            id: "password",
                            input_type: "password",
                            placeholder: "Password",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "button",
                        "data-style": "primary",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }
                }
            }
            Separator {}
            CardFooter {
                p { class: "hint", "Tip: Use the seeder to create demo users." }
            }
        }
    }
}
