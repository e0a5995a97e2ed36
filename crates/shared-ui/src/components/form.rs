use dioxus::prelude::*;

/// A form wrapper that prevents default submission.
#[component]
pub fn Form(#[props(default)] onsubmit: EventHandler<FormEvent>, children: Element) -> Element {
    rsx! {
        form {
            class: "form",
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            {children}
        }
    }
}
