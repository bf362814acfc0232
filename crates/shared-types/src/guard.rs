use crate::{Landing, Role, Session};

/// Outcome of evaluating a guarded subtree against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Render the guarded subtree unchanged.
    Granted,
    /// Replace the current history entry with this landing route.
    Redirect(Landing),
}

/// Decide whether `session` may see a subtree that requires `required`.
///
/// Pure function of its inputs: the same session always produces the same
/// decision, so re-evaluating on every render cannot flicker.
pub fn evaluate(session: Session, required: Role) -> Access {
    match session {
        Session::LoggedOut => Access::Redirect(Landing::Login),
        Session::LoggedIn(role) if role == required => Access::Granted,
        Session::LoggedIn(role) => Access::Redirect(role.landing()),
    }
}

/// Where `/login` should send a visitor who already has a session.
pub fn login_bounce(session: Session) -> Option<Landing> {
    session.role().map(|role| role.landing())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStorage, SessionStore, ALL_ROLES};

    #[test]
    fn logged_out_always_goes_to_login() {
        for required in ALL_ROLES {
            assert_eq!(
                evaluate(Session::LoggedOut, *required),
                Access::Redirect(Landing::Login)
            );
        }
    }

    #[test]
    fn matching_role_is_granted() {
        for role in ALL_ROLES {
            assert_eq!(evaluate(Session::LoggedIn(*role), *role), Access::Granted);
        }
    }

    #[test]
    fn mismatch_redirects_to_own_landing() {
        assert_eq!(
            evaluate(Session::LoggedIn(Role::Student), Role::Teacher),
            Access::Redirect(Landing::StudentHome)
        );
        assert_eq!(
            evaluate(Session::LoggedIn(Role::Teacher), Role::Admin),
            Access::Redirect(Landing::TeacherHome)
        );
        assert_eq!(
            evaluate(Session::LoggedIn(Role::Admin), Role::Student),
            Access::Redirect(Landing::AdminHome)
        );
    }

    #[test]
    fn full_table_never_grants_foreign_roles() {
        for role in ALL_ROLES {
            for required in ALL_ROLES {
                let access = evaluate(Session::LoggedIn(*role), *required);
                if role == required {
                    assert_eq!(access, Access::Granted);
                } else {
                    assert_eq!(access, Access::Redirect(role.landing()));
                }
            }
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let session = Session::LoggedIn(Role::Teacher);
        let first = evaluate(session, Role::Student);
        for _ in 0..5 {
            assert_eq!(evaluate(session, Role::Student), first);
        }
    }

    #[test]
    fn teacher_scenario_from_fresh_client() {
        let mut store = SessionStore::restore(MemoryStorage::new());
        assert_eq!(
            evaluate(store.session(), Role::Teacher),
            Access::Redirect(Landing::Login)
        );

        store.login(Role::Teacher);
        assert_eq!(evaluate(store.session(), Role::Teacher), Access::Granted);
        assert_eq!(
            evaluate(store.session(), Role::Admin),
            Access::Redirect(Landing::TeacherHome)
        );
    }

    #[test]
    fn login_bounce_only_for_sessions() {
        assert_eq!(login_bounce(Session::LoggedOut), None);
        assert_eq!(
            login_bounce(Session::LoggedIn(Role::Admin)),
            Some(Landing::AdminHome)
        );
    }
}
