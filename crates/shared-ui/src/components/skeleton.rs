use dioxus::prelude::*;

/// A loading placeholder with an animated pulse.
#[component]
pub fn Skeleton() -> Element {
    rsx! {
        div { class: "skeleton" }
    }
}
