use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured error body returned by the JokeHub API on non-2xx responses.
/// The adapter propagates it untouched so controllers can decide what, if
/// anything, to surface.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HubError {
    pub error: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Network(String),
    Api(HubError),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Api(hub) => write!(formatter, "{}", hub.error),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_error_deserializes_without_details() {
        let hub: HubError = serde_json::from_str(r#"{"error":"bad request"}"#)
            .expect("Failed to deserialize");
        assert_eq!(hub.error, "bad request");
        assert!(hub.details.is_empty());
    }

    #[test]
    fn display_uses_server_message_for_api_errors() {
        let api = AppError::Api(HubError {
            error: "invalid credentials".to_string(),
            details: vec!["username or password is incorrect".to_string()],
        });
        assert_eq!(api.to_string(), "invalid credentials");

        let network = AppError::Network("connection refused".to_string());
        assert_eq!(network.to_string(), "Network error: connection refused");
    }
}
