use shared_types::{AppError, SessionStorage, StorageKind};

/// Session persistence backed by `localStorage` / `sessionStorage`.
///
/// Off the web there is no browser store, so reads miss and writes succeed
/// without effect; every start is then logged out.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    kind: StorageKind,
}

impl BrowserStorage {
    pub fn new(kind: StorageKind) -> Self {
        Self { kind }
    }

    #[cfg(feature = "web")]
    fn store(&self) -> Result<Option<web_sys::Storage>, AppError> {
        let window = web_sys::window().ok_or_else(|| AppError::storage("window not available"))?;
        let store = match self.kind {
            StorageKind::Local => window.local_storage(),
            StorageKind::Session => window.session_storage(),
            StorageKind::None => return Ok(None),
        }
        .map_err(|e| AppError::storage(format!("{e:?}")))?;
        store
            .map(Some)
            .ok_or_else(|| AppError::storage("storage not available"))
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "web")]
        {
            let store = match self.store() {
                Ok(store) => store?,
                Err(e) => {
                    tracing::warn!(key, error = %e, "storage read failed");
                    return None;
                }
            };
            store.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, self.kind);
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        #[cfg(feature = "web")]
        {
            let Some(store) = self.store()? else {
                return Ok(());
            };
            store
                .set_item(key, value)
                .map_err(|e| AppError::storage(format!("failed to set '{key}': {e:?}")))
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        #[cfg(feature = "web")]
        {
            let Some(store) = self.store()? else {
                return Ok(());
            };
            store
                .remove_item(key)
                .map_err(|e| AppError::storage(format!("failed to remove '{key}': {e:?}")))
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
