//! Implements a struct that holds the state of the web server.

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use time::Duration;

use crate::{
    api::ApiClient, auth::DEFAULT_COOKIE_DURATION, pagination::PaginationConfig,
};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,

    /// The duration for which the cookie holding the access token is valid.
    pub cookie_duration: Duration,

    /// Whether cookies set at log-in carry the `Secure` attribute.
    pub secure_cookies: bool,

    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,

    /// The client for the REST API that owns the data.
    pub api: ApiClient,
}

impl AppState {
    /// Create a new [AppState] that talks to the REST API through `api`.
    pub fn new(cookie_secret: &str, api: ApiClient, pagination_config: PaginationConfig) -> Self {
        Self {
            cookie_key: create_cookie_key(cookie_secret),
            cookie_duration: DEFAULT_COOKIE_DURATION,
            secure_cookies: true,
            pagination_config,
            api,
        }
    }

    /// Set whether browsers may only send the cookies over HTTPS.
    ///
    /// Turn this off when the panel is served over plain HTTP to anything
    /// but localhost.
    pub fn with_secure_cookies(mut self, secure_cookies: bool) -> Self {
        self.secure_cookies = secure_cookies;
        self
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

impl FromRef<AppState> for ApiClient {
    fn from_ref(state: &AppState) -> Self {
        state.api.clone()
    }
}

/// Create a signing key for cookies from a `secret`s string.
pub fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}
