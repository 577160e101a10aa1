use reqwest::Client;
use http::{Request, Response};
use tracing::debug;

use super::{Transport, TransportError};

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        Self::new(format!("reqwest error: {value}"))
    }
}

/// Native http client for running outside the browser
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: Request<Option<String>>) -> Result<Response<String>, TransportError> {
        let (parts, body) = request.into_parts();
        let url = parts.uri.to_string();

        debug!("ReqwestTransport::send({} {url})", parts.method);
        let mut builder = self.client.request(parts.method, url.as_str()).headers(parts.headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        Response::builder()
            .status(status)
            .body(text)
            .map_err(|e| TransportError::new(format!("Invalid response from {url}: {e}")))
    }
}
