use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    fn as_str(&self) -> &'static str {
        match self {
            AvatarSize::Small => "sm",
            AvatarSize::Medium => "md",
            AvatarSize::Large => "lg",
        }
    }
}

/// Round portrait that falls back to initials while the image loads or
/// when it fails.
#[component]
pub fn UserAvatar(
    #[props(default)] src: Option<String>,
    initials: String,
    #[props(default)] size: AvatarSize,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "avatar-frame", "data-size": size.as_str(),
            prim::Avatar { class: "avatar",
                if let Some(url) = src {
                    prim::AvatarImage { class: "avatar-image", src: url, alt: "{initials}" }
                }
                prim::AvatarFallback { class: "avatar-fallback", "{initials}" }
            }
        }
    }
}
