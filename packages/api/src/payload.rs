//! Response shapes of the content API.
//!
//! Depending on the endpoint (and backend version) a list comes back either
//! as a bare JSON array or wrapped as `{"data": [...], "meta": {...}}`, and a
//! single entity either bare or under `data`/`user`. These types make that
//! explicit so the rest of the crate only sees [`Page`] and plain entities.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::{PaginationMeta, User};

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: PaginationMeta::default(),
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.meta.page < self.meta.pages
    }
}

/// A list response. Items are decoded one by one: an item that does not
/// decode is logged and skipped, the rest of the list survives.
#[derive(Debug)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Wrapped {
        data: Vec<T>,
        meta: Option<PaginationMeta>,
    },
    Unrecognized,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawListing {
    Bare(Vec<Value>),
    Wrapped {
        data: Vec<Value>,
        #[serde(default)]
        meta: Option<Value>,
    },
    Unrecognized(IgnoredAny),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Listing<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawListing::deserialize(deserializer)? {
            RawListing::Bare(values) => Listing::Bare(decode_items(values)),
            RawListing::Wrapped { data, meta } => Listing::Wrapped {
                data: decode_items(data),
                meta: meta.and_then(decode_meta),
            },
            RawListing::Unrecognized(_) => Listing::Unrecognized,
        })
    }
}

fn decode_items<T: DeserializeOwned>(values: Vec<Value>) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("payload.listing: skipping item index={index} err={e}");
                None
            }
        })
        .collect()
}

fn decode_meta(value: Value) -> Option<PaginationMeta> {
    if value.is_null() {
        return None;
    }
    serde_json::from_value(value)
        .map_err(|e| tracing::warn!("payload.listing: ignoring meta err={e}"))
        .ok()
}

impl<T> Listing<T> {
    pub fn into_page(self) -> Page<T> {
        match self {
            Listing::Bare(items) => Page {
                items,
                meta: PaginationMeta::default(),
            },
            Listing::Wrapped { data, meta } => Page {
                items: data,
                meta: meta.unwrap_or_default(),
            },
            Listing::Unrecognized => {
                tracing::warn!("payload.listing: unrecognized shape, treating as empty");
                Page::default()
            }
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.into_page().items
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(v) => v,
        }
    }
}

/// Profile endpoints answer with either `{ "user": {...} }` or the user.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UserEnvelope {
    Wrapped { user: User },
    Bare(User),
}

impl UserEnvelope {
    pub fn into_user(self) -> User {
        match self {
            UserEnvelope::Wrapped { user } => user,
            UserEnvelope::Bare(user) => user,
        }
    }
}
