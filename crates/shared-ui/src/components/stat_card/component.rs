use dioxus::prelude::*;

/// Headline figure with a caption and an optional hint line.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: Option<String>,
    #[props(default)] icon: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            div { class: "stat-card-top",
                span { class: "stat-card-label", "{label}" }
                span { class: "stat-card-icon", {icon} }
            }
            span { class: "stat-card-value", "{value}" }
            if let Some(hint) = hint {
                span { class: "stat-card-hint", "{hint}" }
            }
        }
    }
}
