use dioxus::prelude::*;

/// Search field with a leading magnifier glyph.
#[component]
pub fn SearchBar(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            div { class: "search-bar-field",
                span { class: "search-bar-icon", "aria-hidden": "true", "⌕" }
                input {
                    r#type: "search",
                    value: value,
                    placeholder: placeholder,
                    oninput: move |evt| on_input.call(evt.value()),
                }
            }
            {children}
        }
    }
}
