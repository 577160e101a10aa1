//! Test doubles for the storage and transport seams

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
};

use http::{HeaderMap, Method, Request, Response};
use serde_json::Value;

use crate::{
    api::SessionClient,
    config::ClientConfig,
    storage::{MemoryStorage, Storage},
    transport::{Transport, TransportError},
};

pub const BASE_URL: &str = "http://api.test/api";

/// A request as seen by [MockTransport]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl RecordedRequest {
    pub fn json_body(&self) -> Option<Value> {
        self.body.as_deref().map(|b| serde_json::from_str(b).expect("request body is json"))
    }

    /// Path and query with the base url stripped
    pub fn endpoint(&self) -> &str {
        self.uri.strip_prefix(BASE_URL).unwrap_or(&self.uri)
    }
}

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<Result<(u16, String), TransportError>>,
    requests: Vec<RecordedRequest>,
}

/// Replays queued responses in order and records every request
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond<B: Into<String>>(&self, status: u16, body: B) -> &Self {
        self.state.borrow_mut().responses.push_back(Ok((status, body.into())));
        self
    }

    pub fn respond_json(&self, status: u16, body: Value) -> &Self {
        self.respond(status, body.to_string())
    }

    pub fn fail<S: Into<String>>(&self, message: S) -> &Self {
        self.state.borrow_mut().responses.push_back(Err(TransportError::new(message)));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.borrow().requests.last().cloned()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: Request<Option<String>>) -> Result<Response<String>, TransportError> {
        let (parts, body) = request.into_parts();
        let mut state = self.state.borrow_mut();
        state.requests.push(RecordedRequest {
            method: parts.method,
            uri: parts.uri.to_string(),
            headers: parts.headers,
            body,
        });

        let (status, body) = state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("MockTransport: no response queued")))?;

        Ok(Response::builder().status(status).body(body).expect("valid mock response"))
    }
}

/// [MemoryStorage] that counts removals per key
#[derive(Debug, Clone, Default)]
pub struct CountingStorage {
    inner: MemoryStorage,
    removals: Rc<RefCell<HashMap<String, usize>>>,
}

impl CountingStorage {
    pub fn removals(&self, key: &str) -> usize {
        self.removals.borrow().get(key).copied().unwrap_or(0)
    }
}

impl Storage for CountingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        *self.removals.borrow_mut().entry(key.to_string()).or_default() += 1;
        self.inner.remove(key)
    }
}

/// Client with empty storage, plus handles on its storage and transport
pub fn client() -> (SessionClient<MemoryStorage, MockTransport>, MemoryStorage, MockTransport) {
    let storage = MemoryStorage::new();
    let transport = MockTransport::new();
    let client = SessionClient::new(ClientConfig::new(BASE_URL), storage.clone(), transport.clone());
    (client, storage, transport)
}
