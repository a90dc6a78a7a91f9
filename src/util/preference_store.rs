//! Durable key-value storage for user preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStore` wraps the origin-scoped `localStorage`. `MemoryStore` backs
//! native tests and stands in wherever durable storage is not wanted.
//!
//! TRADE-OFFS
//! ==========
//! Storage can be disabled by browser policy. Callers get a `StoreError`
//! instead of a panic and decide locally how to degrade; the theme switch
//! keeps its in-memory state and logs.

#[cfg(test)]
#[path = "preference_store_test.rs"]
mod preference_store_test;

use std::collections::HashMap;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Read/write access to string preferences under well-known keys.
pub trait PreferenceStore {
    /// Load the value stored under `key`, `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the backing store cannot be reached.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the backing store cannot be reached or
    /// rejects the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-process store; contents vanish with the page.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of successful `save` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.localStorage`, looked up on every access.
///
/// Outside the browser build every call reports `StoreError::Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| StoreError::Access(format!("{e:?}")))?
        .ok_or(StoreError::Unavailable)
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StoreError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StoreError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}
