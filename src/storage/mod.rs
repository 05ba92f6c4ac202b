//! Key-value persistence for session state.
//!
//! Each state slice lives under its own string key, mirroring browser local
//! storage. Values are JSON except the covered column, which is stored as a
//! plain string.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use anyhow::Result;
use std::fmt::Debug;

/// Row data array.
pub const DATA_KEY: &str = "vocab-trainer:data";
/// Answer mark array.
pub const ANSWERS_KEY: &str = "vocab-trainer:answers";
/// Covered column name (plain string).
pub const COVER_KEY: &str = "vocab-trainer:cover";
/// Display preferences object.
pub const SETTINGS_KEY: &str = "vocab-trainer:settings";
/// Tape state array.
pub const TAPE_STATES_KEY: &str = "vocab-trainer:tape-states";

/// Keys cleared by a full reset. Display preferences survive.
pub const SESSION_KEYS: [&str; 4] = [DATA_KEY, ANSWERS_KEY, COVER_KEY, TAPE_STATES_KEY];

/// A string key-value store.
pub trait KeyValueStore: Debug {
    /// Read the value for `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be modified.
    fn remove(&mut self, key: &str) -> Result<()>;
}
