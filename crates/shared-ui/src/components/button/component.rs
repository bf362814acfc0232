use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
    /// No chrome until hovered; used for inline row actions.
    Ghost,
}

impl ButtonVariant {
    fn token(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonSize {
    /// Icon-only actions.
    Small,
    #[default]
    Regular,
    /// Call-to-action at the bottom of a card or form.
    Large,
}

impl ButtonSize {
    fn token(self) -> &'static str {
        match self {
            ButtonSize::Small => "sm",
            ButtonSize::Regular => "md",
            ButtonSize::Large => "lg",
        }
    }
}

/// Portal button. `button_type` stays `"button"` unless it submits a form,
/// so a stray button inside a form never posts it.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default = false)] disabled: bool,
    #[props(default = "button".to_string())] button_type: String,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", "button", None, false),
            Attribute::new("data-style", variant.token(), None, false),
            Attribute::new("data-size", size.token(), None, false),
        ],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{button_type}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {children}
        }
    }
}
