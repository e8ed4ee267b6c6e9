//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Core Authentication Flows
//!
//! 1. **Login:** The client POSTs `{username, password}` to `/api/v1/login`
//!    and receives an access/refresh token pair on success.
//! 2. **Registration:** The client POSTs `{username, password,
//!    repeat_password}` to `/api/v1/registration`; only the status code is
//!    consumed.
//! 3. **Password strength:** While the user types a password on the
//!    registration page, the client POSTs the current form snapshot to
//!    `/api/v1/registration/password-strength` and displays the 10-per-second
//!    throttling estimate. Strength-check failures are logged and never shown.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging
//! passwords or token material.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::post_json;
pub(crate) use errors::{AppError, HubError};
