use std::sync::{Arc, RwLock};

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::auth::TOKEN_KEY;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::payload::{Envelope, Listing, Page, UserEnvelope};
use crate::prefs::SharedStore;
use crate::types::{
    Article, ArticleQuery, AuthResponse, Category, Comment, LoginRequest, NewComment, Newspaper,
    NewspaperQuery, ProfileUpdate, RegisterRequest, UploadKind, UploadResponse, User,
};

/// Typed client for the portal's REST API.
///
/// Clones share the HTTP connection pool and the bearer token.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    token: Arc<RwLock<Option<String>>>,
    token_store: Option<SharedStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.token().is_some())
            .finish_non_exhaustive()
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Arc::ptr_eq(&self.token, &other.token)
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::from(config.base_url),
            token: Arc::new(RwLock::new(None)),
            token_store: None,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /// Remove the persisted token from `store` whenever the server answers 401.
    pub fn with_token_store(mut self, store: SharedStore) -> Self {
        self.token_store = Some(store);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = token;
    }

    fn forget_token(&self) {
        self.set_token(None);
        if let Some(store) = &self.token_store {
            if let Err(e) = store.remove(TOKEN_KEY) {
                tracing::warn!("client.forget_token: remove failed err={e}");
            }
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.http.request(method, format!("{}{path}", self.base_url));
        match self.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send_raw(&self, label: &str, req: RequestBuilder) -> Result<String, ApiError> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(
            "client.{label}: status={} body_len={}",
            status.as_u16(),
            body.len()
        );

        if status == StatusCode::UNAUTHORIZED {
            self.forget_token();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }
        Ok(body)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        label: &str,
        req: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.send_raw(label, req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    // Auth

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let req = self
            .request(Method::POST, "/auth/login")
            .json(&LoginRequest { email, password });
        let env: Envelope<AuthResponse> = self.send("auth.login", req).await?;
        Ok(env.into_inner())
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let req = self.request(Method::POST, "/auth/register").json(request);
        let env: Envelope<AuthResponse> = self.send("auth.register", req).await?;
        Ok(env.into_inner())
    }

    pub async fn profile(&self) -> Result<User, ApiError> {
        let req = self.request(Method::GET, "/auth/profile");
        let env: UserEnvelope = self.send("auth.profile", req).await?;
        Ok(env.into_user())
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let req = self.request(Method::PATCH, "/auth/profile").json(update);
        let env: UserEnvelope = self.send("auth.update_profile", req).await?;
        Ok(env.into_user())
    }

    // Articles

    pub async fn articles(&self, query: &ArticleQuery) -> Result<Page<Article>, ApiError> {
        let req = self.request(Method::GET, "/articles").query(query);
        let listing: Listing<Article> = self.send("articles.list", req).await?;
        Ok(listing.into_page())
    }

    pub async fn article(&self, id: i64) -> Result<Article, ApiError> {
        let req = self.request(Method::GET, &format!("/articles/{id}"));
        let env: Envelope<Article> = self.send("articles.get", req).await?;
        Ok(env.into_inner())
    }

    pub async fn article_by_slug(&self, slug: &str) -> Result<Article, ApiError> {
        let path = format!("/articles/slug/{}", urlencoding::encode(slug));
        let req = self.request(Method::GET, &path);
        let env: Envelope<Article> = self.send("articles.by_slug", req).await?;
        Ok(env.into_inner())
    }

    // Categories

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let req = self.request(Method::GET, "/categories");
        let listing: Listing<Category> = self.send("categories.list", req).await?;
        Ok(listing.into_items())
    }

    pub async fn category(&self, id: i64) -> Result<Category, ApiError> {
        let req = self.request(Method::GET, &format!("/categories/{id}"));
        let env: Envelope<Category> = self.send("categories.get", req).await?;
        Ok(env.into_inner())
    }

    pub async fn category_by_slug(&self, slug: &str) -> Result<Category, ApiError> {
        let path = format!("/categories/slug/{}", urlencoding::encode(slug));
        let req = self.request(Method::GET, &path);
        let env: Envelope<Category> = self.send("categories.by_slug", req).await?;
        Ok(env.into_inner())
    }

    // Comments

    pub async fn comments(&self, article_id: Option<i64>) -> Result<Vec<Comment>, ApiError> {
        let mut req = self.request(Method::GET, "/comments");
        if let Some(id) = article_id {
            req = req.query(&[("articleId", id)]);
        }
        let listing: Listing<Comment> = self.send("comments.list", req).await?;
        Ok(listing.into_items())
    }

    pub async fn add_comment(&self, article_id: i64, text: &str) -> Result<Comment, ApiError> {
        let req = self
            .request(Method::POST, "/comments")
            .json(&NewComment { text, article_id });
        let env: Envelope<Comment> = self.send("comments.create", req).await?;
        Ok(env.into_inner())
    }

    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), ApiError> {
        let req = self.request(Method::DELETE, &format!("/comments/{comment_id}"));
        self.send_raw("comments.delete", req).await?;
        Ok(())
    }

    // Newspapers

    pub async fn newspapers(&self, query: &NewspaperQuery) -> Result<Page<Newspaper>, ApiError> {
        let req = self.request(Method::GET, "/newspapers").query(query);
        let listing: Listing<Newspaper> = self.send("newspapers.list", req).await?;
        Ok(listing.into_page())
    }

    pub async fn newspaper(&self, id: i64) -> Result<Newspaper, ApiError> {
        let req = self.request(Method::GET, &format!("/newspapers/{id}"));
        let env: Envelope<Newspaper> = self.send("newspapers.get", req).await?;
        Ok(env.into_inner())
    }

    pub async fn newspaper_by_title(&self, title: &str) -> Result<Newspaper, ApiError> {
        let path = format!("/newspapers/title/{}", urlencoding::encode(title));
        let req = self.request(Method::GET, &path);
        let env: Envelope<Newspaper> = self.send("newspapers.by_title", req).await?;
        Ok(env.into_inner())
    }

    // Uploads

    /// Upload a file and return the URL the server stored it under.
    pub async fn upload(
        &self,
        kind: UploadKind,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        tracing::debug!(
            "client.upload: kind={kind:?} name_len={} bytes={}",
            file_name.len(),
            bytes.len()
        );
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let req = self
            .request(Method::POST, kind.path())
            .multipart(Form::new().part("file", part));
        let env: Envelope<UploadResponse> = self.send("uploads.create", req).await?;
        let url = env.into_inner().url;
        if url.trim().is_empty() {
            return Err(ApiError::MissingUploadUrl);
        }
        Ok(url)
    }
}

/// Pull a human readable message out of an error body. The API reports
/// validation failures as `{"message": [..]}` and others as
/// `{"message": ".."}`.
fn error_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| match v.get("message") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Array(items)) => Some(
                items
                    .iter()
                    .filter_map(|i| i.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => None,
        })
        .filter(|m| !m.is_empty());

    from_json.unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed.len() > 200 {
            status.canonical_reason().unwrap_or("error").to_string()
        } else {
            trimmed.to_string()
        }
    })
}
