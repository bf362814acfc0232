use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

/// Progress bar with an optional caption row above it. `value` is a
/// percentage in `0..=100`.
#[component]
pub fn ProgressBar(
    value: f64,
    #[props(default)] label: String,
    #[props(default = true)] show_value: bool,
) -> Element {
    let clamped = value.clamp(0.0, 100.0);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "progress-row",
            if !label.is_empty() || show_value {
                div { class: "progress-label-row",
                    span { class: "progress-label", "{label}" }
                    if show_value {
                        span { class: "progress-value", "{clamped:.0}%" }
                    }
                }
            }
            prim::Progress { class: "progress", value: Some(clamped),
                prim::ProgressIndicator { class: "progress-indicator" }
            }
        }
    }
}
