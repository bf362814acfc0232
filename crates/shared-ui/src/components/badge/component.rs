use dioxus::prelude::*;

/// Colour of a badge. Grades, statuses and counters each map onto one of
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    /// Brand colour, used for counters.
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    fn token(self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Pill-shaped label. With `dot` set it reads as a status indicator and
/// gets a leading dot in the badge colour.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default = false)] dot: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", "badge", None, false),
            Attribute::new("data-style", variant.token(), None, false),
        ],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { ..merged,
            if dot {
                span { class: "badge-dot", "aria-hidden": "true" }
            }
            {children}
        }
    }
}
