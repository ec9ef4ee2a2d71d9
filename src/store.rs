//! Durable storage seam for the user's theme choice.
//!
//! The choice is one string under a fixed key. Read failures are
//! indistinguishable from an absent value; write failures are reported to
//! the caller, which absorbs them.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Fixed key the choice is stored under.
pub const STORAGE_KEY: &str = "site-theme";

/// Per-user durable key-value storage, narrowed to the one key this crate
/// uses.
pub trait ChoiceStore {
    /// Returns the stored id, or `None` when nothing usable is stored.
    fn load(&self) -> Option<String>;

    /// Writes the id. Callers treat failures as non-fatal.
    fn save(&self, id: &str) -> io::Result<()>;
}

/// Choice storage backed by a single file.
///
/// The default location is a file named after [`STORAGE_KEY`] inside the
/// user's config directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The conventional per-user location, if the platform reports a
    /// config directory.
    pub fn default_location() -> Option<Self> {
        let dir = dirs::config_dir()?;
        Some(Self::new(dir.join("tintbar").join(STORAGE_KEY)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChoiceStore for FileStore {
    fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn save(&self, id: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, id)
    }
}

/// In-memory store with a shared handle, for tests and embedded hosts.
///
/// Clones share the same slot, so a test can keep a handle while the
/// picker owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `id`.
    pub fn with_value(id: &str) -> Self {
        let store = Self::new();
        *store.value.borrow_mut() = Some(id.to_string());
        store
    }
}

impl ChoiceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, id: &str) -> io::Result<()> {
        *self.value.borrow_mut() = Some(id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), None);

        store.save("ocean").unwrap();
        assert_eq!(store.load(), Some("ocean".to_string()));
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.save("retro").unwrap();
        assert_eq!(handle.load(), Some("retro".to_string()));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join(STORAGE_KEY));

        assert_eq!(store.load(), None);
        store.save("violet").unwrap();
        assert_eq!(store.load(), Some("violet".to_string()));
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join(STORAGE_KEY));

        store.save("mint").unwrap();
        assert_eq!(store.load(), Some("mint".to_string()));
    }

    #[test]
    fn test_file_store_trims_and_ignores_blank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_KEY);

        fs::write(&path, "  solar\n").unwrap();
        let store = FileStore::new(&path);
        assert_eq!(store.load(), Some("solar".to_string()));

        fs::write(&path, "   \n").unwrap();
        assert_eq!(store.load(), None);
    }
}
