//! Durable state store backed by a single JSON file
//!
//! All records live in one pretty-printed JSON object, read once on open
//! and rewritten on every write. Personalization state is small (a few
//! id lists), so rewriting the whole file keeps durability simple and
//! synchronous. A file that fails to parse is treated as empty rather
//! than an error - the data is cosmetic personalization state.
//!
//! Reads are served from the records loaded at `open`; the store assumes
//! it is the only writer of its file, so a second instance opened on the
//! same path will not observe writes made through the first after its
//! own `open`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::StateStore;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading any existing records.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let records = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read state file: {}", path.display()))?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { path, records })
    }

    /// Open the store at the per-user default location.
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// `<user data dir>/foodtastetic/state.json`.
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().context("Could not determine user data directory")?;
        Ok(data_dir.join("foodtastetic").join("state.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create state directory: {}", parent.display())
            })?;
        }
        let content = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write state file: {}", self.path.display()))?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
