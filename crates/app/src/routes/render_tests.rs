use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_types::{evaluate, AppConfig, Role, Session, StorageKind, ALL_ROLES};

use super::{GuardGate, Route};
use crate::session::SessionContext;
use crate::storage::BrowserStorage;

const GUARDED: &str = r#"<p class="guarded">Журнал</p>"#;

fn gate(session: Session, required: Role) -> String {
    dioxus_ssr::render_element(rsx! {
        GuardGate { access: evaluate(session, required),
            p { class: "guarded", "Журнал" }
        }
    })
}

#[test]
fn gate_renders_children_for_matching_role() {
    for role in ALL_ROLES {
        assert_eq!(gate(Session::LoggedIn(*role), *role), GUARDED);
    }
}

#[test]
fn gate_hides_children_when_logged_out() {
    for required in ALL_ROLES {
        let html = gate(Session::LoggedOut, *required);
        assert!(!html.contains("guarded"), "{html}");
        assert!(html.contains("guard-redirect"), "{html}");
    }
}

#[test]
fn gate_hides_children_for_other_roles() {
    for held in ALL_ROLES {
        for required in ALL_ROLES.iter().filter(|r| *r != held) {
            let html = gate(Session::LoggedIn(*held), *required);
            assert!(!html.contains("guarded"), "{held} on {required}: {html}");
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PortalProps {
    signed_in: Option<Role>,
}

/// `App` without the browser: non-persistent storage and the default config.
#[allow(non_snake_case)]
fn Portal(props: PortalProps) -> Element {
    use_context_provider(|| {
        let mut session = SessionContext::restore(BrowserStorage::new(StorageKind::None));
        if let Some(role) = props.signed_in {
            session.login(role);
        }
        session
    });
    use_context_provider(|| AppConfig::default().portal);

    rsx! {
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

/// First frame of the portal at `/`.
fn render_home(signed_in: Option<Role>) -> String {
    let mut dom = VirtualDom::new_with_props(Portal, PortalProps { signed_in });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn logged_out_visitor_never_sees_the_shell() {
    let html = render_home(None);
    assert!(html.contains("Перенаправление..."), "{html}");
    assert!(!html.contains("logout-button"), "{html}");
}

#[test]
fn other_role_never_sees_the_student_shell() {
    for role in [Role::Teacher, Role::Admin] {
        let html = render_home(Some(role));
        assert!(html.contains("Перенаправление..."), "{role}: {html}");
        assert!(!html.contains("logout-button"), "{role}: {html}");
    }
}

#[test]
fn student_shell_highlights_only_the_exact_link() {
    let html = render_home(Some(Role::Student));
    assert!(!html.contains("Перенаправление..."), "{html}");
    assert!(html.contains("logout-button"), "{html}");
    for label in ["Главная", "Расписание", "Курсы", "Оценки", "Чат"] {
        assert!(html.contains(label), "missing {label}");
    }
    assert_eq!(html.matches(r#"data-active="true""#).count(), 1);
    assert_eq!(html.matches(r#"data-active="false""#).count(), 4);
}
