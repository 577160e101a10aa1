use std::{cell::RefCell, fmt::Debug};

use http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode,
};
use mime::APPLICATION_JSON;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{
    api::{error::ApiErrorBody, payloads::AuthResponse},
    model::User,
};
use tracing::{debug, error, warn};

use crate::{
    config::ClientConfig,
    error::ClientError,
    routes::ClientRoute,
    session::{Session, SessionStore},
    storage::Storage,
    transport::Transport,
};

mod admin;
mod auth;
mod instructor;
mod payment;
mod student;

/// Method, extra headers and pre-serialized body of a call to [SessionClient::request]
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self { method, ..Default::default() }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn body<S: Into<String>>(mut self, body: S) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, ClientError> {
        let body = serde_json::to_string(body).map_err(ClientError::Encode)?;
        Ok(self.body(body))
    }
}

/// Owns the signed in session and talks to the course platform's REST api
///
/// Storage and transport are injected so the same client runs against
/// `localStorage` + `fetch` in the browser and in-memory doubles in tests.
/// Not thread safe; it lives on the page's event loop.
pub struct SessionClient<S, T> {
    config: ClientConfig,
    store: SessionStore<S>,
    transport: T,
    session: RefCell<Session>,
}

impl<S: Storage, T: Debug> Debug for SessionClient<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The token is a credential, keep it out of logs
        f.debug_struct("SessionClient")
            .field("config", &self.config)
            .field("key_layout", &self.store.layout())
            .field("transport", &self.transport)
            .field(
                "authenticated",
                &self.session.borrow().token.as_deref().is_some_and(|t| !t.is_empty()),
            )
            .finish()
    }
}

impl<S: Storage, T: Transport> SessionClient<S, T> {
    /// Builds the client and loads any session already in `storage`
    pub fn new(config: ClientConfig, storage: S, transport: T) -> Self {
        let store = SessionStore::new(storage, config.key_layout());
        let session = store.load();
        debug!(
            "SessionClient::new(base_url: {}, authenticated: {})",
            config.base_url(),
            session.token.is_some()
        );

        Self {
            config,
            store,
            transport,
            session: RefCell::new(session),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        self.store.storage()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn set_token<V: Into<String>>(&self, token: V) {
        let token = token.into();
        self.store.write_token(&token);
        self.session.borrow_mut().token = Some(token);
    }

    /// In-memory token, falling back to storage in case another page signed in
    ///
    /// An empty token counts as no token, here and in storage.
    pub fn get_token(&self) -> Option<String> {
        let cached = self.session.borrow().token.clone().filter(|t| !t.is_empty());
        cached.or_else(|| self.store.read_token())
    }

    pub fn set_user(&self, user: User) {
        self.store.write_user(&user);
        self.session.borrow_mut().user = Some(user);
    }

    pub fn get_user(&self) -> Option<User> {
        if let Some(user) = self.session.borrow().user.clone() {
            return Some(user);
        }
        self.store.read_user()
    }

    /// Forgets the session in memory and in storage
    ///
    /// Returns the route the caller should navigate to. Safe to call with no session.
    pub fn logout(&self) -> ClientRoute {
        debug!("SessionClient::logout");
        self.store.clear();
        *self.session.borrow_mut() = Session::default();
        ClientRoute::Login
    }

    /// Only checks that a token is present, not that it is still valid
    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    /// Sends `options` to `endpoint` under the configured base url
    ///
    /// `Content-Type: application/json` is set first, then the caller's
    /// headers, then `Authorization: Bearer <token>` when signed in so the
    /// caller can't drop it. The body is parsed as json whatever the status.
    /// A 401 clears the session before the error is returned.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ClientError> {
        let url = self.config.url(endpoint);
        let RequestOptions { method, headers: overrides, body } = options;
        debug!("request({method}, {url})");

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(APPLICATION_JSON.essence_str()).map_err(http::Error::from)?,
        );
        headers.extend(overrides);
        if let Some(token) = self.get_token() {
            let bearer = HeaderValue::from_str(&format!("Bearer {token}")).map_err(http::Error::from)?;
            headers.insert(AUTHORIZATION, bearer);
        }

        let mut request = Request::builder().method(method.clone()).uri(url.as_str()).body(body)?;
        *request.headers_mut() = headers;

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("API request error: {method} {url}: {e}");
                return Err(e.into());
            }
        };

        let status = response.status();
        debug!("request::response::status: {status}");
        let parsed = serde_json::from_str::<Value>(response.body());

        if status == StatusCode::UNAUTHORIZED {
            let message = parsed
                .as_ref()
                .map(ApiErrorBody::from_value)
                .unwrap_or_default()
                .message()
                .to_string();
            warn!("API request unauthorized: {method} {url}: {message}");
            self.logout();
            return Err(ClientError::Unauthorized { message });
        }

        let body = parsed.map_err(|source| {
            error!("API request error: {method} {url}: invalid json ({status}): {source}");
            ClientError::Decode { status, source }
        })?;

        if !status.is_success() {
            let message = ApiErrorBody::from_value(&body).message().to_string();
            warn!("API request error: {method} {url} ({status}): {message}");
            return Err(ClientError::Api { status, message });
        }

        Ok(body)
    }

    async fn get(&self, endpoint: &str) -> Result<Value, ClientError> {
        self.request(endpoint, RequestOptions::get()).await
    }

    async fn post(&self, endpoint: &str) -> Result<Value, ClientError> {
        self.request(endpoint, RequestOptions::post()).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<Value, ClientError> {
        self.request(endpoint, RequestOptions::new(method).json(body)?).await
    }

    /// Stores the token, and the user when present, from a successful auth reply
    fn remember_session(&self, body: &Value) {
        match AuthResponse::deserialize(body) {
            Ok(AuthResponse { success: true, token, user, .. }) => {
                if let Some(token) = token {
                    self.set_token(token);
                }
                if let Some(user) = user {
                    self.set_user(user);
                }
            }
            Ok(_) => debug!("remember_session: response not successful, session unchanged"),
            Err(e) => warn!("remember_session: unexpected auth response shape: {e}"),
        }
    }
}

#[cfg(feature = "wasm")]
impl SessionClient<crate::storage::BrowserStorage, crate::transport::GlooTransport> {
    /// Client over `localStorage` and `fetch` with the build's default config
    pub fn browser() -> Self {
        Self::new(
            ClientConfig::default(),
            crate::storage::BrowserStorage,
            crate::transport::GlooTransport,
        )
    }
}
