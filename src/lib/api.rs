//! HTTP helpers for the JSON API with consistent error handling. Feature
//! clients use these helpers to avoid duplicating request setup. Non-2xx
//! responses are decoded into the server's structured error body when
//! possible so controllers receive it untouched; all failures resolve to the
//! error branch and never panic past the caller.
//!
//! No timeout is configured on requests. A hung submit therefore leaves the
//! form disabled until the browser gives up on the connection.

use super::errors::{AppError, HubError};

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Posts JSON and parses a JSON response.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, AppError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    use gloo_net::http::Request;

    let url = build_url(path);
    let response = Request::post(&url)
        .json(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?
        .send()
        .await
        .map_err(map_request_error)?;

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(decode_error_body(status, body))
    }
}

/// Builds a URL from the configured API base URL and the provided path.
#[cfg(target_arch = "wasm32")]
fn build_url(path: &str) -> String {
    let config = super::config::AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    AppError::Network(format!("Unable to reach the server: {err}"))
}

/// Decodes a non-2xx body into the structured API error when possible,
/// falling back to a sanitized plain-text error.
fn decode_error_body(status: u16, body: String) -> AppError {
    match serde_json::from_str::<HubError>(&body) {
        Ok(hub) => AppError::Api(hub),
        Err(_) => AppError::Http {
            status,
            message: sanitize_body(body),
        },
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and
/// truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_with_base_joins_segments() {
        assert_eq!(
            build_url_with_base("https://jokehub.dev", "/api/v1/login"),
            "https://jokehub.dev/api/v1/login"
        );
        assert_eq!(
            build_url_with_base("https://jokehub.dev/", "api/v1/login"),
            "https://jokehub.dev/api/v1/login"
        );
        assert_eq!(build_url_with_base("", "/api/v1/login"), "/api/v1/login");
        assert_eq!(
            build_url_with_base("  https://jokehub.dev  ", " /api/v1/login "),
            "https://jokehub.dev/api/v1/login"
        );
    }

    #[test]
    fn decode_error_body_keeps_structured_payload() {
        let err = decode_error_body(
            401,
            r#"{"error":"invalid credentials","details":["username or password is incorrect"]}"#
                .to_string(),
        );
        assert_eq!(
            err,
            AppError::Api(HubError {
                error: "invalid credentials".to_string(),
                details: vec!["username or password is incorrect".to_string()],
            })
        );
    }

    #[test]
    fn decode_error_body_falls_back_to_sanitized_text() {
        let err = decode_error_body(502, "  Bad Gateway  ".to_string());
        assert_eq!(
            err,
            AppError::Http {
                status: 502,
                message: "Bad Gateway".to_string(),
            }
        );

        let empty = decode_error_body(500, String::new());
        assert_eq!(
            empty,
            AppError::Http {
                status: 500,
                message: "Request failed.".to_string(),
            }
        );
    }
}
