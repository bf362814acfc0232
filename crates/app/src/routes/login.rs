use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{login_bounce, LoginForm, PortalSettings, Role, ALL_ROLES};
use shared_ui::{
    use_toast, Button, ButtonSize, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, ToastOptions,
};

use crate::routes::landing_route;
use crate::session::use_session;

/// Demo sign-in. Picking a role prefills its credentials; any well-formed
/// email and password then signs in with that role.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let settings: PortalSettings = use_context();
    let toast = use_toast();

    let mut selected_role = use_signal(|| Role::Student);
    let mut email = use_signal(|| LoginForm::prefilled(Role::Student).email);
    let mut password = use_signal(|| LoginForm::prefilled(Role::Student).password);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    // Someone with a session has no business on the login screen.
    if let Some(landing) = login_bounce(session.current()) {
        navigator().replace(landing_route(landing));
    }

    let mut pick_role = move |next: Role| {
        let form = LoginForm::prefilled(next);
        selected_role.set(next);
        email.set(form.email);
        password.set(form.password);
        field_errors.set(HashMap::new());
    };

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let form = LoginForm {
            email: email(),
            password: password(),
        };
        match form.check() {
            Ok(()) => {
                field_errors.set(HashMap::new());
                let selected = selected_role();
                session.login(selected);
                toast.success("Успешный вход".to_string(), ToastOptions::new());
                navigator().replace(landing_route(selected.landing()));
            }
            Err(e) => {
                tracing::debug!(error = %e, "login form rejected");
                field_errors.set(e.field_errors);
            }
        }
    };

    let email_error = field_errors.read().get("email").cloned();
    let password_error = field_errors.read().get("password").cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-brand",
                div { class: "auth-logo", "🎓" }
                h1 { class: "auth-title", "{settings.title}" }
                p { class: "auth-tagline", "Единый портал университета" }
            }

            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Вход в систему" }
                    CardDescription { "Выберите роль для входа в демо-версию" }
                }

                CardContent {
                    div { class: "role-switch", role: "tablist",
                        for candidate in ALL_ROLES.iter().copied() {
                            button {
                                key: "{candidate}",
                                r#type: "button",
                                class: "role-switch-option",
                                role: "tab",
                                "aria-selected": if selected_role() == candidate { "true" } else { "false" },
                                onclick: move |_| pick_role(candidate),
                                "{candidate.display_name()}"
                            }
                        }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: email(),
                            error: email_error,
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Пароль",
                            input_type: "password",
                            value: password(),
                            error: password_error,
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button { class: "auth-submit", size: ButtonSize::Large, button_type: "submit", "Войти" }
                    }
                }
            }
        }
    }
}
