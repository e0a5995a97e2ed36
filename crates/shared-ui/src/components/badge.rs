use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Success,
    Warning,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
        }
    }
}

/// A small status label.
#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        span {
            class: "badge",
            "data-style": variant.class(),
            {children}
        }
    }
}
