//! Persistence backends for personalization state
//!
//! Everything the engine persists - the three interaction sets and the
//! daily pick record - goes through the `StateStore` trait as string
//! records keyed by a logical name. The in-memory backend serves tests
//! and ephemeral sessions, the JSON file backend is the durable one.
//! Writes are synchronous: when `write` returns, the record is stored.

pub mod json_file;
pub mod memory;

use anyhow::Result;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// String-keyed record storage with synchronous durability.
pub trait StateStore {
    /// Read a record, `None` when the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write a record durably before returning.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}
