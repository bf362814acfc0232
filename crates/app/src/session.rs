use dioxus::prelude::*;
use shared_types::{Role, Session, SessionStore};

use crate::storage::BrowserStorage;

/// Handle to the session store, provided once by `App`.
///
/// The store inside the signal is the only writer of session state; views
/// read through [`SessionContext::current`] and subscribe to changes.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: Signal<SessionStore<BrowserStorage>>,
}

impl SessionContext {
    pub fn restore(storage: BrowserStorage) -> Self {
        Self {
            store: Signal::new(SessionStore::restore(storage)),
        }
    }

    pub fn current(&self) -> Session {
        self.store.read().session()
    }

    pub fn login(&mut self, role: Role) {
        self.store.write().login(role);
    }

    pub fn logout(&mut self) {
        self.store.write().logout();
    }
}

/// Hook to access the session.
///
/// # Panics
///
/// When no `SessionContext` was provided above the caller.
pub fn use_session() -> SessionContext {
    try_use_context::<SessionContext>().unwrap_or_else(|| {
        panic!("use_session() called outside the session provider; mount the view under App")
    })
}
