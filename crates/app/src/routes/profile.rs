use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{courses, viewer, ProfileContacts, Role, TEACHER_PROFILE};
use shared_ui::{
    use_toast, AvatarSize, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent,
    CardHeader, CardTitle, CardTone, Input, StatCard, ToastOptions, UserAvatar,
};

#[component]
pub fn TeacherProfile() -> Element {
    let profile = TEACHER_PROFILE;
    let person = viewer(Role::Teacher);
    let taught = use_hook(courses);
    let toast = use_toast();

    let mut editing = use_signal(|| false);
    let mut saved = use_signal(|| ProfileContacts::of(&TEACHER_PROFILE));
    let mut draft = use_signal(|| ProfileContacts::of(&TEACHER_PROFILE));
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    // Cancelling drops the draft.
    let toggle_edit = move |_: MouseEvent| {
        if editing() {
            draft.set(saved());
            field_errors.set(HashMap::new());
        }
        editing.set(!editing());
    };

    let save = move |_: MouseEvent| {
        let checked = draft.read().check();
        match checked {
            Ok(cleaned) => {
                tracing::info!(email = %cleaned.email, "teacher profile updated");
                saved.set(cleaned.clone());
                draft.set(cleaned);
                field_errors.set(HashMap::new());
                editing.set(false);
                toast.success("Профиль успешно обновлен".to_string(), ToastOptions::new());
            }
            Err(e) => {
                tracing::debug!(error = %e, "profile edit rejected");
                field_errors.set(e.field_errors);
            }
        }
    };

    let contacts = saved();
    let email_error = field_errors.read().get("email").cloned();
    let position_error = field_errors.read().get("position").cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./profile.css") }

        Card { class: "profile-hero", tone: CardTone::Brand,
            CardContent {
                div { class: "profile-hero-body",
                    UserAvatar {
                        src: Some(person.avatar_url()),
                        initials: person.initials(),
                        size: AvatarSize::Large,
                    }
                    div {
                        h1 { class: "profile-name", "{profile.full_name}" }
                        p { class: "profile-headline", "{profile.headline}" }
                    }
                    div { class: "profile-hero-actions",
                        Button { variant: ButtonVariant::Outline, onclick: toggle_edit,
                            if editing() { "Отменить" } else { "Редактировать профиль" }
                        }
                        if editing() {
                            Button { onclick: save, "Сохранить" }
                        }
                    }
                }
            }
        }

        div { class: "metric-grid",
            StatCard { label: "Индекс цитирования", value: profile.citation_index.to_string() }
            StatCard { label: "Часов преподавания", value: profile.teaching_hours.to_string() }
            StatCard { label: "Рейтинг студентов", value: format!("{:.1}", profile.rating) }
        }

        div { class: "profile-columns",
            Card {
                CardHeader { CardTitle { "Личная информация" } }
                CardContent {
                    if editing() {
                        div { class: "profile-form",
                            Input {
                                label: "Email",
                                input_type: "email",
                                value: draft.read().email.clone(),
                                error: email_error,
                                on_input: move |e: FormEvent| draft.write().email = e.value(),
                            }
                            Input {
                                label: "Должность",
                                value: draft.read().position.clone(),
                                error: position_error,
                                on_input: move |e: FormEvent| draft.write().position = e.value(),
                            }
                        }
                    } else {
                        dl { class: "profile-facts",
                            dt { "Email" }
                            dd { "{contacts.email}" }
                            dt { "Учёная степень" }
                            dd { "{profile.degree}" }
                            dt { "Должность" }
                            dd { "{contacts.position}" }
                        }
                    }
                    div { class: "profile-skills",
                        for skill in profile.skills.iter() {
                            Badge { key: "{skill}", variant: BadgeVariant::Secondary, "{skill}" }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Преподаваемые курсы" } }
                CardContent {
                    ul { class: "profile-list",
                        for course in taught.iter() {
                            li { key: "{course.id}",
                                span { "{course.title}" }
                                span { class: "profile-list-meta", "{course.students} студентов" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Публикации" } }
                CardContent {
                    ul { class: "profile-list",
                        for publication in profile.publications.iter() {
                            li { key: "{publication}", "{publication}" }
                        }
                    }
                }
            }
        }
    }
}
