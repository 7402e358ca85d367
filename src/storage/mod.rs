//! Key-value persistence
//!
//! The game never touches storage directly: sessions receive a
//! `KeyValueStore` and read or write JSON blobs through it.

mod error;
mod file;
mod memory;

pub use error::{Result, StorageError};
pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Minimal string key-value store
pub trait KeyValueStore {
    /// Read a value, `None` if the key is absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing a missing key is not an error
    fn clear(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn clear(&self, key: &str) -> Result<()> {
        (**self).clear(key)
    }
}

/// Load and decode a JSON value
///
/// Missing, unreadable and unparsable values are all reported as `None`;
/// the latter two are logged.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("Failed to read {key}: {e}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Discarding corrupt {key}: {e}");
            None
        }
    }
}

/// Encode and store a JSON value
///
/// # Errors
/// Returns an error if encoding or the underlying write fails.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let store = MemoryStore::new();
        save_json(&store, "numbers", &vec![1, 2, 3]).unwrap();
        assert_eq!(load_json::<Vec<u32>>(&store, "numbers"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn corrupt_json_is_absent() {
        let store = MemoryStore::new();
        store.set("numbers", "[1, 2,").unwrap();
        assert_eq!(load_json::<Vec<u32>>(&store, "numbers"), None);
    }

    #[test]
    fn missing_json_is_absent() {
        let store = MemoryStore::new();
        assert_eq!(load_json::<Vec<u32>>(&store, "numbers"), None);
    }

    #[test]
    fn works_through_references() {
        let store = MemoryStore::new();
        let by_ref = &store;
        by_ref.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
