use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message used when a failed response doesn't say what went wrong
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// The part of a failed response body the client cares about
///
/// The backend replies `{"success": false, "error": "..."}` on failure but the
/// body is otherwise free-form, so everything but `error` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Pulls the `error` field out of an arbitrary json body
    ///
    /// Non-string values are kept as their json text. Null, empty strings and
    /// non-object bodies count as no message.
    pub fn from_value(body: &Value) -> Self {
        let error = match body.get("error") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        Self { error }
    }

    pub fn message(&self) -> &str {
        self.error.as_deref().unwrap_or(FALLBACK_ERROR_MESSAGE)
    }
}
