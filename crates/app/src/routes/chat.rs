use chrono::{DateTime, Local, TimeZone};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCopy, LdEyeOff, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::{conversations, sample_thread, MessageBody, Role};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, ToastOptions,
};

/// `HH:MM` stamp shown on a message.
fn time_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%H:%M").to_string()
}

/// Put `text` on the system clipboard through the webview.
fn copy_to_clipboard(text: &str) {
    let eval = document::eval("navigator.clipboard.writeText(await dioxus.recv());");
    if let Err(e) = eval.send(text.to_string()) {
        tracing::warn!(error = ?e, "clipboard write failed");
    }
}

#[component]
pub fn Chat() -> Element {
    rsx! { Messenger { role: Role::Student } }
}

#[component]
pub fn TeacherChat() -> Element {
    rsx! { Messenger { role: Role::Teacher } }
}

/// Conversation list plus the open thread. Messages live only while the
/// view is mounted.
#[component]
fn Messenger(role: Role) -> Element {
    let chats = use_hook(conversations);
    let mut thread = use_signal(sample_thread);
    let mut draft = use_signal(String::new);
    let toast = use_toast();

    let counterpart = match role {
        Role::Student => "Абдикерим Н.Б.",
        Role::Teacher => "Иванов А.",
        Role::Admin => "Деканат ФИТ",
    };

    let mut send = move || {
        let now = time_label(&Local::now());
        if thread.write().send(&draft.read(), &now) {
            draft.set(String::new());
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./chat.css") }

        div { class: "chat-layout",
            Card { class: "chat-list",
                div { class: "chat-list-title", "Сообщения" }
                for (index, chat) in chats.iter().enumerate() {
                    div {
                        key: "{chat.title}",
                        class: "chat-list-item",
                        "data-active": if index == 0 { "true" } else { "false" },
                        div { class: "chat-list-row",
                            span { class: "chat-list-name", "{chat.title}" }
                            span { class: "chat-list-time", "{chat.time}" }
                        }
                        div { class: "chat-list-row",
                            span { class: "chat-list-preview", "{chat.preview}" }
                            if chat.unread > 0 {
                                Badge { variant: BadgeVariant::Primary, "{chat.unread}" }
                            }
                        }
                    }
                }
            }

            Card { class: "chat-thread",
                div { class: "chat-thread-header", "{counterpart}" }
                div { class: "chat-messages",
                    for message in thread.read().messages().iter().cloned() {
                        div {
                            key: "{message.id}",
                            class: "chat-message",
                            "data-from-me": if message.from_me { "true" } else { "false" },
                            "data-unread": if message.unread { "true" } else { "false" },
                            div { class: "chat-message-actions",
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    size: ButtonSize::Small,
                                    title: "Копировать",
                                    onclick: {
                                        let text = message.copy_text().to_string();
                                        move |_: MouseEvent| {
                                            copy_to_clipboard(&text);
                                            toast.success("Скопировано в буфер обмена".to_string(), ToastOptions::new());
                                        }
                                    },
                                    Icon::<LdCopy> { icon: LdCopy, width: 14, height: 14 }
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    size: ButtonSize::Small,
                                    title: "Пометить как непрочитанное",
                                    onclick: move |_: MouseEvent| {
                                        if thread.write().mark_unread(message.id) {
                                            toast.info("Помечено как непрочитанное".to_string(), ToastOptions::new());
                                        }
                                    },
                                    Icon::<LdEyeOff> { icon: LdEyeOff, width: 14, height: 14 }
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    size: ButtonSize::Small,
                                    class: "chat-action-danger",
                                    title: "Удалить",
                                    onclick: move |_: MouseEvent| {
                                        if thread.write().delete(message.id).is_some() {
                                            tracing::debug!(id = message.id, "message deleted");
                                            toast.success("Сообщение удалено".to_string(), ToastOptions::new());
                                        }
                                    },
                                    Icon::<LdTrash2> { icon: LdTrash2, width: 14, height: 14 }
                                }
                            }
                            match message.body {
                                MessageBody::Text(text) => rsx! {
                                    p { class: "chat-bubble", "{text}" }
                                },
                                MessageBody::File { name, size } => rsx! {
                                    div { class: "chat-bubble chat-file",
                                        span { class: "chat-file-name", "📎 {name}" }
                                        span { class: "chat-file-size", "{size}" }
                                    }
                                },
                            }
                            span { class: "chat-time", "{message.time}" }
                        }
                    }
                }
                form {
                    class: "chat-composer",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        send();
                    },
                    input {
                        r#type: "text",
                        placeholder: "Напишите сообщение...",
                        value: draft(),
                        oninput: move |e| draft.set(e.value()),
                    }
                    Button { button_type: "submit", "Отправить" }
                }
            }
        }
    }
}
