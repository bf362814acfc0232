use dioxus::prelude::*;

/// Titled block whose body can be folded away.
#[component]
pub fn Section(
    title: String,
    #[props(default = true)] default_open: bool,
    #[props(default)] trailing: Element,
    children: Element,
) -> Element {
    let mut open = use_signal(|| default_open);
    let state = if open() { "open" } else { "closed" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section { class: "section", "data-state": state,
            div { class: "section-header",
                button {
                    class: "section-toggle",
                    r#type: "button",
                    "aria-expanded": if open() { "true" } else { "false" },
                    onclick: move |_| open.toggle(),
                    span { class: "section-chevron", "aria-hidden": "true",
                        if open() { "▾" } else { "▸" }
                    }
                    h2 { class: "section-title", "{title}" }
                }
                {trailing}
            }
            if open() {
                div { class: "section-body", {children} }
            }
        }
    }
}
