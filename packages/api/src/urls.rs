//! Repair of asset, avatar and PDF links coming back from the content API.
//!
//! Upstream data sometimes concatenates a CMS base URL with a pasted
//! absolute URL, drops the colon from a scheme, or stores a bare domain.
//! [`normalize_external_url`] recovers what it can and otherwise returns
//! `None` so callers fall back to a placeholder instead of requesting a
//! broken host.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Host used upstream as a non-resolving default.
pub const PLACEHOLDER_HOST: &str = "example.com";

// `https//`, `http:/` and any casing of the scheme become `scheme://`.
static SCHEME_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(https?)(://|//|:/)").expect("valid scheme regex"));

static BARE_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9.-]+\.[a-z]{2,}[/?#]").expect("valid bare domain regex")
});

/// Turn a raw URL from the API into an absolute http(s) URL, or `None`
/// when nothing usable can be recovered.
///
/// When a value holds several URLs glued together, the last one wins. This
/// also cuts a legitimate URL that embeds `http://` in a query value.
pub fn normalize_external_url(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }

    let repaired = SCHEME_MARKER.replace_all(trimmed, |caps: &Captures<'_>| {
        format!("{}://", caps[1].to_ascii_lowercase())
    });

    let start = [repaired.rfind("https://"), repaired.rfind("http://")]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0);
    let url = &repaired[start..];

    if let Some(rest) = strip_scheme(url) {
        let host = host_of(rest);
        if host.is_empty() || is_placeholder(host) {
            return None;
        }
        return Some(url.to_string());
    }

    if BARE_DOMAIN.is_match(url) {
        if is_placeholder(host_of(url)) {
            return None;
        }
        return Some(format!("https://{url}"));
    }

    None
}

fn strip_scheme(url: &str) -> Option<&str> {
    ["https://", "http://"].iter().find_map(|scheme| {
        url.get(..scheme.len())
            .filter(|head| head.eq_ignore_ascii_case(scheme))
            .map(|_| &url[scheme.len()..])
    })
}

// Authority without userinfo or port.
fn host_of(rest: &str) -> &str {
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let authority = authority.rsplit('@').next().unwrap_or_default();
    authority.split(':').next().unwrap_or_default()
}

fn is_placeholder(host: &str) -> bool {
    host.eq_ignore_ascii_case(PLACEHOLDER_HOST)
}
