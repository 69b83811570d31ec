//! Language selection for bilingual (Uzbek/Russian) content.
//!
//! Every content entity carries an Uzbek value and an optional Russian one.
//! [`resolve_content`] picks between them; [`LanguageState`] holds the one
//! current language of a session and persists changes to a
//! [`PreferenceStore`](crate::prefs::PreferenceStore).

use serde::{Deserialize, Serialize};

use crate::prefs::SharedStore;

/// Storage key of the persisted language preference.
pub const LANGUAGE_KEY: &str = "language";

/// Supported content languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Uz,
    Ru,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Uz => "uz",
            Lang::Ru => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "uz" | "uz-uz" | "uz-latn" | "uz-latn-uz" => Some(Lang::Uz),
            "ru" | "ru-ru" => Some(Lang::Ru),
            _ => None,
        }
    }

    /// Short label shown on the language toggle.
    pub fn label(self) -> &'static str {
        match self {
            Lang::Uz => "UZ",
            Lang::Ru => "RU",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::Uz => Lang::Ru,
            Lang::Ru => Lang::Uz,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Raised when a raw language code is neither `uz` nor `ru`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code: {0:?}")]
pub struct UnknownLanguage(pub String);

impl std::str::FromStr for Lang {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Pick the Russian value when `lang` is Russian and the value is non-empty,
/// otherwise the Uzbek one.
pub fn resolve_content<'a>(lang: Lang, primary: &'a str, secondary: Option<&'a str>) -> &'a str {
    match (lang, secondary) {
        (Lang::Ru, Some(ru)) if !ru.is_empty() => ru,
        _ => primary,
    }
}

/// The current language of a session together with the store it is
/// persisted in.
#[derive(Clone)]
pub struct LanguageState {
    lang: Lang,
    store: SharedStore,
}

impl std::fmt::Debug for LanguageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageState")
            .field("lang", &self.lang)
            .finish_non_exhaustive()
    }
}

impl PartialEq for LanguageState {
    fn eq(&self, other: &Self) -> bool {
        self.lang == other.lang
    }
}

impl LanguageState {
    /// Read the persisted preference. Only the exact codes `uz` and `ru` are
    /// honoured; anything else loads as Uzbek.
    pub fn load(store: SharedStore) -> Self {
        let lang = match store.get(LANGUAGE_KEY).as_deref() {
            Some("ru") => Lang::Ru,
            Some("uz") | None => Lang::Uz,
            Some(saved) => {
                tracing::debug!("lang.load: ignoring stored code={saved:?}");
                Lang::default()
            }
        };
        tracing::debug!("lang.load: lang={lang}");
        Self { lang, store }
    }

    pub fn language(&self) -> Lang {
        self.lang
    }

    /// Switch language and persist it for the next session. A failed write
    /// is logged; the in-memory switch stays.
    pub fn set_language(&mut self, lang: Lang) {
        self.lang = lang;
        if let Err(e) = self.store.set(LANGUAGE_KEY, lang.code()) {
            tracing::warn!("lang.set_language: persist failed lang={lang} err={e}");
        }
    }

    /// Like [`set_language`](Self::set_language) for a raw code. Unknown
    /// codes leave the state untouched.
    pub fn set_language_code(&mut self, code: &str) -> Result<Lang, UnknownLanguage> {
        let lang = code.parse::<Lang>()?;
        self.set_language(lang);
        Ok(lang)
    }

    pub fn toggle(&mut self) -> Lang {
        let next = self.lang.toggled();
        self.set_language(next);
        next
    }

    pub fn resolve<'a>(&self, primary: &'a str, secondary: Option<&'a str>) -> &'a str {
        resolve_content(self.lang, primary, secondary)
    }
}
