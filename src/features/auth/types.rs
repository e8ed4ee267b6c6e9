//! Request and response types for auth-related API calls. These payloads
//! carry credentials and tokens, so they must never be logged.
//!
//! Absent form fields are omitted from request bodies rather than sent as
//! empty strings, matching what the server expects from the browser client.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_password: Option<String>,
}

/// Token pair returned by a successful login. The access token is handed to
/// the session context; this client never persists it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Auth {
    pub access_token: String,
    pub refresh_token: String,
}

/// Crack-time estimates returned by the password-strength endpoint, one per
/// attacker throttling scenario. Only the 10-guesses-per-second estimate is
/// displayed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Strength {
    pub throttling_100_hour: String,
    pub throttling_10_second: String,
    pub throttling_10k_second: String,
    pub throttling_10b_second: String,
}
