pub const DEFAULT_API_URL: &str = "https://gazeta-uz.onrender.com";
pub const API_URL_ENV: &str = "GAZETA_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Root of the REST API, always ending in `/api`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn with_base_url(raw: &str) -> Self {
        Self {
            base_url: normalize_api_base_url(raw),
        }
    }

    /// Read `GAZETA_API_URL`, falling back to the public deployment.
    pub fn from_env() -> Self {
        #[cfg(feature = "native")]
        {
            // Best-effort: a missing .env is the normal case outside development.
            let _ = dotenvy::dotenv();
        }

        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::default(),
        }
    }
}

/// Strip trailing slashes and make sure the URL ends in `/api`.
pub fn normalize_api_base_url(raw: &str) -> String {
    let url = raw.trim_end_matches('/');
    if url.ends_with("/api") {
        url.to_string()
    } else {
        format!("{url}/api")
    }
}
