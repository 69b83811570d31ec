use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::error::PrefsError;

/// Key/value string storage scoped to a device or browser profile.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
    fn remove(&self, key: &str) -> Result<(), PrefsError>;
}

pub type SharedStore = Arc<dyn PreferenceStore>;

/// Process-local store for tests and hosts without persistent storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PrefsError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.remove(key);
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file::FileStore;

#[cfg(feature = "native")]
mod file {
    use super::*;
    use std::path::{Path, PathBuf};

    /// Store backed by a flat JSON object on disk.
    ///
    /// A missing or unreadable file reads as empty. Every write rewrites the
    /// whole file.
    #[derive(Debug)]
    pub struct FileStore {
        path: PathBuf,
        lock: Mutex<()>,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self {
                path: path.into(),
                lock: Mutex::new(()),
            }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> BTreeMap<String, String> {
            let raw = match std::fs::read_to_string(&self.path) {
                Ok(raw) => raw,
                Err(_) => return BTreeMap::new(),
            };
            serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(
                    "prefs.file.read_all: ignoring corrupt file path={} err={e}",
                    self.path.display()
                );
                BTreeMap::new()
            })
        }

        fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), PrefsError> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let body = serde_json::to_string_pretty(values)?;
            std::fs::write(&self.path, body)?;
            tracing::debug!(
                "prefs.file.write_all: path={} keys={}",
                self.path.display(),
                values.len()
            );
            Ok(())
        }
    }

    impl PreferenceStore for FileStore {
        fn get(&self, key: &str) -> Option<String> {
            let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
            self.read_all().remove(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
            let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
            let mut values = self.read_all();
            values.insert(key.to_string(), value.to_string());
            self.write_all(&values)
        }

        fn remove(&self, key: &str) -> Result<(), PrefsError> {
            let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
            let mut values = self.read_all();
            if values.remove(key).is_none() {
                return Ok(());
            }
            self.write_all(&values)
        }
    }
}
