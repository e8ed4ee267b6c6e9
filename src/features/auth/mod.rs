//! Auth feature module covering the login and registration flows. It keeps
//! the form state machines and API payloads out of the UI so route code
//! stays focused on markup and wiring. This module handles credentials and
//! must avoid logging passwords or token material.
//!
//! Flow Overview: Login submits credentials and hands the returned token
//! pair to the session context. Registration submits the form after a local
//! password match check and, while the user types a password, fires
//! non-fatal strength probes whose estimate is shown next to the field.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod form;
pub(crate) mod state;
pub(crate) mod types;
