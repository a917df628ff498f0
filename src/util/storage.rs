//! Durable storage backends for the session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` never touches `localStorage` directly; it talks to a
//! `SessionStorage` backend injected at construction. The browser backend
//! is hydrate-only, so SSR and native tests run against the in-memory one.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::Mutex;
use std::sync::PoisonError;

/// `localStorage` key holding the serialized session record.
pub const SESSION_STORAGE_KEY: &str = "skillforge_session";

/// One origin-scoped durable slot for the raw session record.
///
/// Writes are last-write-wins across tabs; there is no cross-tab
/// coordination.
pub trait SessionStorage: Send + Sync {
    /// Read the raw record, if one is stored.
    fn load(&self) -> Option<String>;
    /// Replace the record.
    fn store(&self, raw: &str);
    /// Remove the record.
    fn clear(&self);
}

/// `localStorage`-backed slot under [`SESSION_STORAGE_KEY`].
///
/// All operations are best-effort: outside the browser (or with storage
/// disabled) reads return `None` and writes do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl SessionStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::local_storage()?.get_item(SESSION_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, raw: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::local_storage() {
                let _ = storage.set_item(SESSION_STORAGE_KEY, raw);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = raw;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::local_storage() {
                let _ = storage.remove_item(SESSION_STORAGE_KEY);
            }
        }
    }
}

/// In-memory slot for tests and server-side rendering.
///
/// Each instance is independent, so tests get isolated sessions by
/// constructing their own.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, raw: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
