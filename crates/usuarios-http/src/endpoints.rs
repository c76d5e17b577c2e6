//! Resource paths and wire types.

use serde::Deserialize;

/// Path of the users collection, relative to the API base.
pub const USERS_PATH: &str = "/usuarios/";

/// Error body returned by the backend on non-success statuses.
///
/// `detail` is a string for application errors and a list of objects for
/// request validation errors.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub(crate) fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
