use dioxus::prelude::*;

/// A styled card container.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! {
        div { class: "card", {children} }
    }
}

/// Header section of a Card.
#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

/// Title element within a CardHeader.
#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

/// Description text within a CardHeader.
#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

/// Main content section of a Card.
#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Footer section of a Card.
#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}
