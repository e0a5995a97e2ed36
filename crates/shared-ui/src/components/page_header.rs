use dioxus::prelude::*;

/// Page header container wrapping a title and optional status text.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        div { class: "page-header", {children} }
    }
}

/// Page title element rendered as an h1.
#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-title", {children} }
    }
}

/// Container for status text or actions in the page header.
#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}
