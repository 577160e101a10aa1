use http::StatusCode;

use crate::{routes::ClientRoute, transport::TransportError};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No response was received
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-2xx response other than 401
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// 401 response. The stored session has already been cleared
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// The response body wasn't json
    #[error("Invalid json in response ({status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The url or a header couldn't be turned into a valid request
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] http::Error),

    #[error("Browser error: {message}")]
    Browser { message: String },
}

impl ClientError {
    /// Text suitable for showing to the user
    ///
    /// For server rejections this is the server's `error` field, or the
    /// generic fallback when it didn't send one.
    pub fn message(&self) -> String {
        match self {
            ClientError::Api { message, .. } | ClientError::Unauthorized { message } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } | ClientError::Decode { status, .. } => Some(*status),
            ClientError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }

    /// Where the caller should navigate after this error, if anywhere
    pub fn redirect(&self) -> Option<ClientRoute> {
        self.is_unauthorized().then_some(ClientRoute::Login)
    }
}
