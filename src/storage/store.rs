//! Key-value persistence port.
//!
//! The engine persists two things: the active player identity (a string)
//! and the encoded leaderboard (bytes). Any backend that can get and set
//! those by key can host a game.

use rustc_hash::FxHashMap;

use crate::core::error::{MemorizeError, Result};

/// Storage backend used by the engine.
///
/// Loads return `Ok(None)` for a missing key. The engine treats any error
/// as "nothing stored" on load and as a lost write on save.
pub trait KeyValueStore {
    /// Read a string value.
    fn load_string(&self, key: &str) -> Result<Option<String>>;

    /// Write a string value.
    fn save_string(&mut self, key: &str, value: &str) -> Result<()>;

    /// Read a byte blob.
    fn load_bytes(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write a byte blob.
    fn save_bytes(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn load_string(&self, key: &str) -> Result<Option<String>> {
        (**self).load_string(key)
    }

    fn save_string(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).save_string(key, value)
    }

    fn load_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).load_bytes(key)
    }

    fn save_bytes(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        (**self).save_bytes(key, bytes)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Value {
    Text(String),
    Bytes(Vec<u8>),
}

/// In-memory store.
///
/// Strings and blobs live in one namespace; reading a key with the wrong
/// accessor is a storage error. `fail_writes` makes every save fail,
/// for exercising lost-write handling.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, Value>,
    fail_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail (or succeed again).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Whether a key holds any value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn check_writable(&self, key: &str) -> Result<()> {
        if self.fail_writes {
            return Err(MemorizeError::Storage(format!("write to '{key}' rejected")));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn load_string(&self, key: &str) -> Result<Option<String>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::Text(text)) => Ok(Some(text.clone())),
            Some(Value::Bytes(_)) => Err(MemorizeError::Storage(format!("'{key}' holds bytes, not a string"))),
        }
    }

    fn save_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_writable(key)?;
        self.values.insert(key.to_string(), Value::Text(value.to_string()));
        Ok(())
    }

    fn load_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::Bytes(bytes)) => Ok(Some(bytes.clone())),
            Some(Value::Text(_)) => Err(MemorizeError::Storage(format!("'{key}' holds a string, not bytes"))),
        }
    }

    fn save_bytes(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.check_writable(key)?;
        self.values.insert(key.to_string(), Value::Bytes(bytes.to_vec()));
        Ok(())
    }
}
