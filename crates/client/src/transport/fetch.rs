use gloo::net::http::{Method, RequestBuilder};
use http::{Request, Response};
use tracing::debug;

use super::{Transport, TransportError};

impl From<gloo::net::Error> for TransportError {
    fn from(value: gloo::net::Error) -> Self {
        Self::new(format!("gloo-net error: {value}"))
    }
}

/// Browser `fetch` through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, request: Request<Option<String>>) -> Result<Response<String>, TransportError> {
        let (parts, body) = request.into_parts();
        let url = parts.uri.to_string();

        let method = Method::from_bytes(parts.method.as_str().as_bytes())
            .map_err(|e| TransportError::new(format!("Unsupported method {}: {e}", parts.method)))?;
        let mut builder = RequestBuilder::new(&url).method(method);

        for (name, value) in parts.headers.iter() {
            let value = value
                .to_str()
                .map_err(|e| TransportError::new(format!("Header {name} is not visible ascii: {e}")))?;
            builder = builder.header(name.as_str(), value);
        }

        debug!("GlooTransport::send({} {url})", parts.method);
        let request = match body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }?;

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        Response::builder()
            .status(status)
            .body(text)
            .map_err(|e| TransportError::new(format!("Invalid response from {url}: {e}")))
    }
}
