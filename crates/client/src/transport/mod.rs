#![allow(async_fn_in_trait)]

use http::{Request, Response};

#[cfg(feature = "wasm")]
mod fetch;
#[cfg(feature = "wasm")]
pub use fetch::*;

#[cfg(feature = "native")]
mod native;
#[cfg(feature = "native")]
pub use native::*;

/// The request never produced a response (offline, DNS, CORS, refused...)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }
}

/// Sends a fully built request and hands back the status and raw body
///
/// Interpreting the body is left to the caller so non-2xx responses still
/// reach it intact. Futures are not `Send`; the client runs on a single
/// threaded event loop.
pub trait Transport {
    async fn send(&self, request: Request<Option<String>>) -> Result<Response<String>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: Request<Option<String>>) -> Result<Response<String>, TransportError> {
        (**self).send(request).await
    }
}
