//! Dioxus providers and components consuming the portal core.

mod article_card;
pub use article_card::{article_href, ArticleCard, CardLayout};

mod newspaper_card;
pub use newspaper_card::NewspaperCard;

mod auth;
pub use auth::{use_api, use_session, ApiProvider, AuthGate};

mod comments;
pub use comments::CommentThread;

mod profile;
pub use profile::ProfileEditPage;

mod media;
pub use media::{avatar_initial, image_src, FALLBACK_IMAGE_SRC};

mod storage;
pub use storage::{device_store, PREFS_PATH_ENV};

#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
pub use storage::prefs_path;

#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStore;

mod i18n;
pub use i18n::{set_lang, t, use_current_lang, use_lang, I18nProvider, LanguageToggle};
