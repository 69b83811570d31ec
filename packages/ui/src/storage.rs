use std::sync::{Arc, OnceLock};

use gazeta_api::SharedStore;

/// Environment variable overriding the preferences file of native builds.
pub const PREFS_PATH_ENV: &str = "GAZETA_PREFS_PATH";

static DEVICE_STORE: OnceLock<SharedStore> = OnceLock::new();

/// The preference store of the device the app runs on, shared by every
/// provider: `localStorage` in the browser, a JSON file in the user's config
/// directory on native builds, process memory otherwise.
pub fn device_store() -> SharedStore {
    DEVICE_STORE.get_or_init(open_device_store).clone()
}

#[cfg(target_arch = "wasm32")]
fn open_device_store() -> SharedStore {
    Arc::new(browser::BrowserStore)
}

#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
fn open_device_store() -> SharedStore {
    match prefs_path() {
        Some(path) => {
            tracing::debug!("storage.open: file={}", path.display());
            Arc::new(gazeta_api::FileStore::new(path))
        }
        None => {
            tracing::warn!("storage.open: no config directory, preferences kept in memory");
            Arc::new(gazeta_api::MemoryStore::new())
        }
    }
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "native")))]
fn open_device_store() -> SharedStore {
    Arc::new(gazeta_api::MemoryStore::new())
}

/// `$GAZETA_PREFS_PATH`, else `<config dir>/gazeta/preferences.json`.
#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
pub fn prefs_path() -> Option<std::path::PathBuf> {
    if let Ok(path) = std::env::var(PREFS_PATH_ENV) {
        if !path.trim().is_empty() {
            return Some(std::path::PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push("gazeta");
        path.push("preferences.json");
        path
    })
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use gazeta_api::{PreferenceStore, PrefsError};

    /// `window.localStorage`. Private browsing and disabled storage surface
    /// as [`PrefsError::Unavailable`] on writes and as missing values on reads.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStore;

    impl BrowserStore {
        fn storage() -> Result<web_sys::Storage, PrefsError> {
            web_sys::window()
                .ok_or_else(|| PrefsError::Unavailable("no window".to_string()))?
                .local_storage()
                .map_err(|_| PrefsError::Unavailable("localStorage access denied".to_string()))?
                .ok_or_else(|| PrefsError::Unavailable("localStorage missing".to_string()))
        }
    }

    impl PreferenceStore for BrowserStore {
        fn get(&self, key: &str) -> Option<String> {
            Self::storage().ok()?.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|_| PrefsError::Unavailable(format!("setItem({key}) failed")))
        }

        fn remove(&self, key: &str) -> Result<(), PrefsError> {
            Self::storage()?
                .remove_item(key)
                .map_err(|_| PrefsError::Unavailable(format!("removeItem({key}) failed")))
        }
    }
}
