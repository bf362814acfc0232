use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{AppError, Role};

/// Storage key holding the authenticated flag (`"true"` or absent).
pub const AUTH_KEY: &str = "isAuthenticated";
/// Storage key holding the role string (absent when logged out).
pub const ROLE_KEY: &str = "role";

/// Current session of the running client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(Role),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Session::LoggedIn(role) => Some(*role),
            Session::LoggedOut => None,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            authenticated: self.is_authenticated(),
            role: self.role(),
        }
    }
}

/// Flat `{authenticated, role}` view handed to display code.
///
/// Always derived from a [`Session`], so `authenticated == false` implies
/// `role == None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub role: Option<Role>,
}

/// Synchronous string key-value store backing the session.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// In-process storage. Clones share the same map, which lets a test
/// rebuild a [`SessionStore`] over the "same browser" to simulate a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Session state plus its persisted copy. The only writer of both.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Build the store by reading persisted state once.
    ///
    /// Anything other than a `"true"` flag paired with a known role string
    /// resolves to [`Session::LoggedOut`]. Leftover keys from a partial or
    /// corrupt state are removed so the next start reads a clean slate.
    pub fn restore(storage: S) -> Self {
        let flag = storage.get(AUTH_KEY);
        let role = storage.get(ROLE_KEY);

        let session = match (flag.as_deref(), role.as_deref()) {
            (None, None) => {
                tracing::debug!("no persisted session");
                Session::LoggedOut
            }
            (Some("true"), Some(raw)) => match Role::parse(raw) {
                Ok(role) => {
                    tracing::debug!(%role, "restored persisted session");
                    Session::LoggedIn(role)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "discarding persisted session");
                    clear_keys(&storage);
                    Session::LoggedOut
                }
            },
            (flag, role) => {
                tracing::warn!(?flag, ?role, "discarding partial persisted session");
                clear_keys(&storage);
                Session::LoggedOut
            }
        };

        Self { storage, session }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Enter `LoggedIn(role)` and persist it. A failed write is logged and
    /// otherwise ignored; the in-memory session still changes.
    pub fn login(&mut self, role: Role) {
        self.session = Session::LoggedIn(role);
        if let Err(e) = self
            .storage
            .set(AUTH_KEY, "true")
            .and_then(|_| self.storage.set(ROLE_KEY, role.as_str()))
        {
            tracing::warn!(error = %e, "failed to persist session");
        }
        tracing::info!(%role, "logged in");
    }

    /// Parse `raw` and log in. Unknown roles are rejected before anything
    /// changes.
    pub fn login_as(&mut self, raw: &str) -> Result<Role, AppError> {
        let role = Role::parse(raw)?;
        self.login(role);
        Ok(role)
    }

    /// Return to `LoggedOut` and drop the persisted keys. Idempotent.
    pub fn logout(&mut self) {
        let was = self.session;
        self.session = Session::LoggedOut;
        clear_keys(&self.storage);
        if was.is_authenticated() {
            tracing::info!("logged out");
        }
    }
}

fn clear_keys<S: SessionStorage>(storage: &S) {
    for key in [AUTH_KEY, ROLE_KEY] {
        if let Err(e) = storage.remove(key) {
            tracing::warn!(key, error = %e, "failed to clear persisted session key");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppErrorKind, ALL_ROLES};
    use pretty_assertions::assert_eq;

    /// Storage whose writes always fail, reads always miss.
    struct BrokenStorage;

    impl SessionStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&self, key: &str, _value: &str) -> Result<(), AppError> {
            Err(AppError::storage(format!("cannot write {key}")))
        }
        fn remove(&self, key: &str) -> Result<(), AppError> {
            Err(AppError::storage(format!("cannot remove {key}")))
        }
    }

    fn seeded(pairs: &[(&str, &str)]) -> MemoryStorage {
        let storage = MemoryStorage::new();
        for (k, v) in pairs {
            storage.set(k, v).unwrap();
        }
        storage
    }

    #[test]
    fn empty_storage_restores_logged_out() {
        let store = SessionStore::restore(MemoryStorage::new());
        assert_eq!(store.session(), Session::LoggedOut);
        assert_eq!(
            store.snapshot(),
            SessionSnapshot {
                authenticated: false,
                role: None
            }
        );
    }

    #[test]
    fn login_persists_and_survives_reload() {
        for role in ALL_ROLES {
            let storage = MemoryStorage::new();
            let mut store = SessionStore::restore(storage.clone());
            store.login(*role);
            assert_eq!(
                store.snapshot(),
                SessionSnapshot {
                    authenticated: true,
                    role: Some(*role)
                }
            );
            assert_eq!(storage.get(AUTH_KEY).as_deref(), Some("true"));
            assert_eq!(storage.get(ROLE_KEY).as_deref(), Some(role.as_str()));

            let reloaded = SessionStore::restore(storage);
            assert_eq!(reloaded.session(), Session::LoggedIn(*role));
        }
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::restore(storage.clone());
        store.login(Role::Teacher);
        store.logout();

        assert_eq!(
            store.snapshot(),
            SessionSnapshot {
                authenticated: false,
                role: None
            }
        );
        assert!(storage.is_empty());
        assert_eq!(SessionStore::restore(storage).session(), Session::LoggedOut);
    }

    #[test]
    fn logout_twice_matches_once() {
        let once_storage = MemoryStorage::new();
        let mut once = SessionStore::restore(once_storage.clone());
        once.login(Role::Admin);
        once.logout();

        let twice_storage = MemoryStorage::new();
        let mut twice = SessionStore::restore(twice_storage.clone());
        twice.login(Role::Admin);
        twice.logout();
        twice.logout();

        assert_eq!(once.session(), twice.session());
        assert_eq!(once_storage.len(), twice_storage.len());
    }

    #[test]
    fn flag_without_role_resolves_logged_out() {
        let storage = seeded(&[(AUTH_KEY, "true")]);
        let store = SessionStore::restore(storage.clone());
        assert_eq!(store.session(), Session::LoggedOut);
        assert!(!store.snapshot().authenticated);
        assert!(storage.is_empty());
    }

    #[test]
    fn malformed_states_resolve_logged_out() {
        let cases: &[&[(&str, &str)]] = &[
            &[(ROLE_KEY, "student")],
            &[(AUTH_KEY, "false"), (ROLE_KEY, "student")],
            &[(AUTH_KEY, "1"), (ROLE_KEY, "admin")],
            &[(AUTH_KEY, "true"), (ROLE_KEY, "dean")],
            &[(AUTH_KEY, "true"), (ROLE_KEY, "")],
            &[(AUTH_KEY, "")],
        ];
        for pairs in cases {
            let storage = seeded(pairs);
            let store = SessionStore::restore(storage.clone());
            assert_eq!(store.session(), Session::LoggedOut, "case {pairs:?}");
            assert!(storage.is_empty(), "stale keys left for {pairs:?}");
        }
    }

    #[test]
    fn login_as_rejects_unknown_role_without_mutation() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::restore(storage.clone());
        let err = store.login_as("superuser").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidRole);
        assert_eq!(store.session(), Session::LoggedOut);
        assert!(storage.is_empty());
    }

    #[test]
    fn login_as_rejection_keeps_existing_session() {
        let mut store = SessionStore::restore(MemoryStorage::new());
        store.login(Role::Student);
        assert!(store.login_as("none").is_err());
        assert_eq!(store.session(), Session::LoggedIn(Role::Student));
    }

    #[test]
    fn login_as_accepts_known_role() {
        let mut store = SessionStore::restore(MemoryStorage::new());
        assert_eq!(store.login_as("teacher").unwrap(), Role::Teacher);
        assert_eq!(store.session(), Session::LoggedIn(Role::Teacher));
    }

    #[test]
    fn storage_failure_is_best_effort() {
        let mut store = SessionStore::restore(BrokenStorage);
        store.login(Role::Student);
        assert_eq!(store.session(), Session::LoggedIn(Role::Student));
        store.logout();
        assert_eq!(store.session(), Session::LoggedOut);
    }

    #[test]
    fn switching_roles_overwrites_persisted_role() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::restore(storage.clone());
        store.login(Role::Student);
        store.login(Role::Admin);
        assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("admin"));
        assert_eq!(storage.len(), 2);
    }
}
