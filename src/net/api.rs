//! Request plumbing for the portfolio REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! bearer token attached from durable storage. Server-side (SSR): stubs
//! returning errors since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are converted into user-facing `String` messages at this
//! boundary: a JSON `{"message": ...}` field in the failure body is
//! preferred, with a generic status line as fallback. Callers never see a
//! panic or a raw transport error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, LoginResponse};

/// Derive a user-facing message from a failed response.
///
/// Prefers the API's own `message` payload so e.g. "Invalid credentials"
/// reaches the user verbatim; anything else becomes a status line.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn error_message(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| format!("request failed: {status}"))
}

/// Current `Authorization` header value, if a session token is stored.
#[cfg(feature = "hydrate")]
fn authorization() -> Option<String> {
    crate::util::storage::get_string(crate::state::auth::TOKEN_KEY)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, String> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        let message = error_message(resp.status(), &body);
        leptos::logging::warn!("api error: status={} message={}", resp.status(), message);
        return Err(message);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// GET `path` and decode a JSON response.
#[cfg(feature = "hydrate")]
pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let mut req = gloo_net::http::Request::get(path);
    if let Some(auth) = authorization() {
        req = req.header("Authorization", &auth);
    }
    let resp = req.send().await.map_err(|e| e.to_string())?;
    decode(resp).await
}

/// POST a JSON `body` to `path` and decode a JSON response.
#[cfg(feature = "hydrate")]
pub(crate) async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let mut req = gloo_net::http::Request::post(path);
    if let Some(auth) = authorization() {
        req = req.header("Authorization", &auth);
    }
    let resp = req
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(resp).await
}

/// PUT a JSON `body` to `path` and decode a JSON response.
#[cfg(feature = "hydrate")]
pub(crate) async fn put_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let mut req = gloo_net::http::Request::put(path);
    if let Some(auth) = authorization() {
        req = req.header("Authorization", &auth);
    }
    let resp = req
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(resp).await
}

/// DELETE `path`, ignoring any response body.
#[cfg(feature = "hydrate")]
pub(crate) async fn delete(path: &str) -> Result<(), String> {
    let mut req = gloo_net::http::Request::delete(path);
    if let Some(auth) = authorization() {
        req = req.header("Authorization", &auth);
    }
    let resp = req.send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(error_message(resp.status(), &body));
    }
    Ok(())
}

/// Authenticate via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's failure message, or a generic status line when the
/// body carries none.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/login", credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}
