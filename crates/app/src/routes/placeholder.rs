use dioxus::prelude::*;
use shared_types::View;

/// Placeholder for a navigable feature that has not shipped yet.
#[component]
pub fn ComingSoonPanel(view: View) -> Element {
    let title = view.title();
    rsx! {
        div { class: "coming-soon-panel",
            h2 { "{title} is coming soon" }
            p { "This feature is on the roadmap. Check back after the next release." }
        }
    }
}

/// Shell for an implemented feature whose screens are provided by its own module.
#[component]
pub fn FeaturePanel(view: View) -> Element {
    let title = view.title();
    let id = view.id();
    rsx! {
        div { class: "feature-panel", "data-view": "{id}",
            h2 { "{title}" }
        }
    }
}

/// A view id this build does not know, e.g. from a newer deep link.
#[component]
pub fn UnknownViewPanel(view_id: String) -> Element {
    rsx! {
        div { class: "unknown-view-panel",
            h2 { "Feature unavailable" }
            p {
                "The feature "
                code { "{view_id}" }
                " is not available in this version of the portal."
            }
        }
    }
}
