//! HTTP gateway for the Readloom REST API.
//!
//! # Design
//! - One uniform request/response/error shape for every backend call.
//! - Callers never see raw transport errors; everything is normalized into
//!   [`ApiError`] and logged to the console diagnostic channel first.
//! - Single attempt, no retries, no timeouts; retry policy belongs to the
//!   caller.

use gloo::console;
use gloo_net::http::{Method, Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Write as _;

/// Normalized failure for any gateway call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network unreachable or the request could not be built/sent.
    #[error("Error: {0}")]
    Transport(String),
    /// Non-2xx response, with the server-supplied message when present.
    #[error("Error {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-supplied or fallback message.
        message: String,
    },
}

impl ApiError {
    /// Wrap a client-side transport fault.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Wrap a non-2xx response.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Human-readable message, always non-empty.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status code, when the backend answered at all.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport(_) => None,
            Self::Status { status, .. } => Some(*status),
        }
    }
}

/// Append URL-encoded query parameters to a path.
#[must_use]
pub fn build_query(path: &str, params: &[(&str, &str)]) -> String {
    let mut out = path.to_string();
    let mut separator = if path.contains('?') { '&' } else { '?' };
    for (key, value) in params {
        let _ = write!(
            out,
            "{separator}{}={}",
            urlencoding::encode(key),
            urlencoding::encode(value)
        );
        separator = '&';
    }
    out
}

/// Pull the human-readable message out of an error body. The backend answers
/// with `{"error": "..."}`; `message` is accepted for forward compatibility.
fn extract_server_message(body: &serde_json::Value) -> Option<String> {
    body.get("error")
        .or_else(|| body.get("message"))
        .and_then(serde_json::Value::as_str)
        .map(String::from)
}

fn log_and(error: ApiError) -> ApiError {
    console::error!("api request failed", error.to_string());
    error
}

/// Thin JSON client over the configured base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client rooted at `base_url` (scheme + host, no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// GET `path` with optional query parameters.
    ///
    /// # Errors
    /// Returns a normalized [`ApiError`] for transport and server faults.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let path = build_query(path, params);
        self.execute(Request::new(&self.url(&path)).method(Method::GET))
            .await
    }

    /// POST a JSON `body` to `path`.
    ///
    /// # Errors
    /// Returns a normalized [`ApiError`] for transport and server faults.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Request::new(&self.url(path))
            .method(Method::POST)
            .json(body)
            .map_err(|err| log_and(ApiError::transport(err.to_string())))?;
        self.execute(request).await
    }

    /// PUT a JSON `body` to `path`.
    ///
    /// # Errors
    /// Returns a normalized [`ApiError`] for transport and server faults.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Request::new(&self.url(path))
            .method(Method::PUT)
            .json(body)
            .map_err(|err| log_and(ApiError::transport(err.to_string())))?;
        self.execute(request).await
    }

    /// PATCH a JSON `body` onto `path`.
    ///
    /// # Errors
    /// Returns a normalized [`ApiError`] for transport and server faults.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Request::new(&self.url(path))
            .method(Method::PATCH)
            .json(body)
            .map_err(|err| log_and(ApiError::transport(err.to_string())))?;
        self.execute(request).await
    }

    /// DELETE `path`.
    ///
    /// # Errors
    /// Returns a normalized [`ApiError`] for transport and server faults.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Request::new(&self.url(path)).method(Method::DELETE))
            .await
    }

    /// DELETE `path` with a JSON `body`.
    ///
    /// # Errors
    /// Returns a normalized [`ApiError`] for transport and server faults.
    pub async fn delete_with<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Request::new(&self.url(path))
            .method(Method::DELETE)
            .json(body)
            .map_err(|err| log_and(ApiError::transport(err.to_string())))?;
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| log_and(ApiError::transport(err.to_string())))?;
        let response = Self::check(response).await.map_err(log_and)?;
        response
            .json::<T>()
            .await
            .map_err(|err| log_and(ApiError::transport(err.to_string())))
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let fallback = response.status_text();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| extract_server_message(&body))
            .unwrap_or(fallback);
        Err(ApiError::from_status(status, message))
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, build_query, extract_server_message};

    #[test]
    fn transport_errors_keep_the_generic_shape() {
        let error = ApiError::transport("network unreachable");
        assert_eq!(error.message(), "Error: network unreachable");
        assert_eq!(error.status_code(), None);
        assert!(!error.message().is_empty());
    }

    #[test]
    fn status_errors_carry_code_and_message() {
        let error = ApiError::from_status(404, "series not found");
        assert_eq!(error.message(), "Error 404: series not found");
        assert_eq!(error.status_code(), Some(404));
    }

    #[test]
    fn build_query_encodes_parameters() {
        let path = build_query("/api/series", &[("search", "one piece"), ("limit", "20")]);
        assert_eq!(path, "/api/series?search=one%20piece&limit=20");
    }

    #[test]
    fn build_query_without_params_is_identity() {
        assert_eq!(build_query("/api/authors", &[]), "/api/authors");
    }

    #[test]
    fn build_query_appends_to_existing_queries() {
        let path = build_query("/api/calendar?window=month", &[("start", "2026-01-01")]);
        assert_eq!(path, "/api/calendar?window=month&start=2026-01-01");
    }

    #[test]
    fn server_message_prefers_error_field() {
        let body = serde_json::json!({"error": "root folder in use", "message": "ignored"});
        assert_eq!(
            extract_server_message(&body).as_deref(),
            Some("root folder in use")
        );
        let fallback = serde_json::json!({"message": "bad request"});
        assert_eq!(extract_server_message(&fallback).as_deref(), Some("bad request"));
        assert_eq!(extract_server_message(&serde_json::json!({})), None);
    }
}
