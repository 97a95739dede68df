use dioxus::prelude::*;

/// Neutral spinner shown while data or the session check is pending.
#[component]
pub fn LoadingPlaceholder() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "spinner" }
            span { class: "visually-hidden", "Loading..." }
        }
    }
}

#[component]
pub fn ProgressBar(fill_class: String, style: String) -> Element {
    rsx! {
        div { class: "bar-track",
            div { class: "{fill_class}", style: "{style}" }
        }
    }
}
