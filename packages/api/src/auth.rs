use crate::client::ApiClient;
use crate::error::ApiError;
use crate::prefs::SharedStore;
use crate::types::{AuthResponse, ProfileUpdate, RegisterRequest, User};

/// Storage key of the persisted bearer token.
pub const TOKEN_KEY: &str = "access_token";

/// Signed-in state of the current device: the bearer token (persisted) and
/// the user it belongs to (fetched).
#[derive(Clone)]
pub struct Session {
    client: ApiClient,
    store: SharedStore,
    user: Option<User>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("user_id", &self.user.as_ref().map(|u| u.id))
            .finish_non_exhaustive()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.client == other.client && self.user == other.user
    }
}

impl Session {
    /// Load a saved token into `client`. The user is fetched by
    /// [`bootstrap`](Self::bootstrap). A 401 on any request through the
    /// client afterwards also drops the saved token.
    pub fn restore(client: ApiClient, store: SharedStore) -> Self {
        let client = client.with_token_store(store.clone());
        let saved = store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        tracing::debug!("auth.restore: has_token={}", saved.is_some());
        client.set_token(saved);
        Self {
            client,
            store,
            user: None,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.token().is_some()
    }

    /// Fetch the profile for a restored token. Any failure signs out.
    pub async fn bootstrap(&mut self) -> Option<&User> {
        let token = self.client.token()?;
        let result = self.client.profile().await;
        self.apply_bootstrap(&token, result);
        self.user.as_ref()
    }

    /// Apply a profile fetched with `token`. A result for a token the session
    /// no longer holds (signed out or switched meanwhile) is dropped.
    pub fn apply_bootstrap(&mut self, token: &str, result: Result<User, ApiError>) {
        if !self.holds(Some(token)) {
            tracing::debug!("auth.bootstrap: dropping result for a replaced token");
            return;
        }
        match result {
            Ok(user) => {
                tracing::debug!("auth.bootstrap: user_id={}", user.id);
                self.user = Some(user);
            }
            Err(e) => {
                tracing::error!("auth.bootstrap: failed to fetch profile err={e}");
                self.logout();
            }
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, ApiError> {
        let response = self.client.login(email.trim(), password).await?;
        Ok(self.accept(response))
    }

    pub async fn register(
        &mut self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<&User, ApiError> {
        let request = RegisterRequest {
            full_name: full_name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
            ..Default::default()
        };
        let response = self.client.register(&request).await?;
        Ok(self.accept(response))
    }

    pub async fn update_profile(&mut self, update: &ProfileUpdate) -> Result<&User, ApiError> {
        let token = self.client.token();
        let result = self.client.update_profile(update).await;
        self.apply_profile_update(token.as_deref(), result)?;
        self.user.as_ref().ok_or(ApiError::Unauthorized)
    }

    /// Apply a profile update sent with `token`. A 401 clears the user once
    /// the token is gone; a success for a replaced token is dropped.
    pub fn apply_profile_update(
        &mut self,
        token: Option<&str>,
        result: Result<User, ApiError>,
    ) -> Result<(), ApiError> {
        let user = match result {
            Ok(user) => user,
            Err(ApiError::Unauthorized) => {
                if !self.is_authenticated() {
                    self.user = None;
                }
                return Err(ApiError::Unauthorized);
            }
            Err(e) => return Err(e),
        };
        if !self.holds(token) {
            tracing::debug!("auth.update_profile: dropping result for a replaced token");
            return Ok(());
        }
        tracing::info!("auth.update_profile: user_id={}", user.id);
        self.user = Some(user);
        Ok(())
    }

    pub fn logout(&mut self) {
        self.client.set_token(None);
        self.user = None;
        if let Err(e) = self.store.remove(TOKEN_KEY) {
            tracing::warn!("auth.logout: remove token failed err={e}");
        }
    }

    fn holds(&self, token: Option<&str>) -> bool {
        token.is_some() && self.client.token().as_deref() == token
    }

    fn accept(&mut self, response: AuthResponse) -> &User {
        if let Err(e) = self.store.set(TOKEN_KEY, &response.access_token) {
            tracing::warn!("auth.accept: persist token failed err={e}");
        }
        self.client.set_token(Some(response.access_token));
        tracing::info!("auth.accept: user_id={}", response.user.id);
        self.user.insert(response.user)
    }
}
