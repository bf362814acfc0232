use dioxus::prelude::*;

use crate::routes::Route;

/// Any unmatched path. Replaces itself with `/`, whose guard then sends the
/// visitor wherever their session belongs.
#[component]
pub fn Fallback(segments: Vec<String>) -> Element {
    tracing::debug!(path = %format!("/{}", segments.join("/")), "unknown path");
    navigator().replace(Route::StudentDashboard {});

    rsx! {
        div { class: "guard-redirect",
            p { "Перенаправление..." }
        }
    }
}
