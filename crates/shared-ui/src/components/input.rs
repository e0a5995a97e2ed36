use dioxus::prelude::*;

/// A styled text input with an optional label above it.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                class: "input",
                id: if !id.is_empty() { "{id}" },
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
            }
        }
    }
}
