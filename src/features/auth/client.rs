//! Client wrappers for the JokeHub auth API endpoints. These helpers pin the
//! paths in one place and keep route code free of URL handling. They must
//! never log request payloads.

use crate::{
    app_lib::{AppError, post_json},
    features::auth::types::{Auth, LoginRequest, RegistrationRequest, Strength},
};

/// Submits credentials and returns the token pair on success.
pub async fn login(request: &LoginRequest) -> Result<Auth, AppError> {
    post_json("/api/v1/login", request).await
}

/// Creates an account. Only the status code is consumed; the success body is
/// ignored.
pub async fn register(request: &RegistrationRequest) -> Result<(), AppError> {
    post_json::<_, serde_json::Value>("/api/v1/registration", request)
        .await
        .map(|_| ())
}

/// Asks the server for crack-time estimates of the current form snapshot.
/// Callers treat failures as non-fatal.
pub async fn password_strength(request: &RegistrationRequest) -> Result<Strength, AppError> {
    post_json("/api/v1/registration/password-strength", request).await
}
