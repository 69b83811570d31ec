//! Client-side core of the Gazeta news portal: bilingual content
//! resolution, repair of upstream URLs, and a typed client for the portal's
//! REST API.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod dates;
pub mod error;
pub mod lang;
pub mod payload;
pub mod prefs;
pub mod types;
pub mod urls;


pub use auth::{Session, TOKEN_KEY};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, PrefsError};
pub use lang::{resolve_content, Lang, LanguageState, UnknownLanguage, LANGUAGE_KEY};
pub use payload::Page;
pub use prefs::{MemoryStore, PreferenceStore, SharedStore};
pub use urls::normalize_external_url;

#[cfg(feature = "native")]
pub use prefs::FileStore;
