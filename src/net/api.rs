//! REST exchanges for authentication.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `Unavailable`/`None` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and rejections are folded into [`AuthError`] so
//! callers can surface one notification and move on; nothing here panics
//! or escapes as an unhandled rejection. The current-user fetch degrades
//! to `None` on every failure path.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{LoginCredentials, RegisterForm, TokenPair, User};
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

#[cfg(feature = "hydrate")]
const LOGIN_ENDPOINT: &str = "/auth/login/";
#[cfg(feature = "hydrate")]
const REGISTER_ENDPOINT: &str = "/auth/register/";
#[cfg(feature = "hydrate")]
const CURRENT_USER_ENDPOINT: &str = "/auth/me";

/// Failure of a login or registration exchange.
///
/// `Network` keeps the underlying cause for the console but displays a
/// generic connectivity message; `Rejected` displays the server's own
/// wording when it sent any.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("could not reach the server, try again")]
    Network(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("not available on server")]
    Unavailable,
}

/// Exchange credentials for a token pair via `POST /auth/login/`.
///
/// The body is form-urlencoded (`username`, `password`), matching the
/// OAuth2 password-flow shape the backend expects.
///
/// # Errors
///
/// Returns [`AuthError`] on transport failure, a non-2xx response, or a
/// success response without a usable access token. State is untouched
/// either way; storing the token is the caller's move.
pub async fn login(credentials: &LoginCredentials) -> Result<TokenPair, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(login_form_body(credentials))
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        decode_token_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(AuthError::Unavailable)
    }
}

/// Create an account via `POST /auth/register/` and return the server's
/// confirmation message.
///
/// # Errors
///
/// Returns [`AuthError`] on transport failure or a non-2xx response.
pub async fn register(form: &RegisterForm) -> Result<String, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(form)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        decode_register_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(AuthError::Unavailable)
    }
}

/// Fetch the signed-in user from `GET /auth/me`.
///
/// With no token the call short-circuits to `None` before any network
/// traffic. HTTP and transport failures also resolve to `None`; they are
/// logged, never raised, so a stale token degrades to logged-out rendering
/// instead of an error page.
pub async fn fetch_current_user(token: Option<&str>) -> Option<User> {
    let token = token?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT)
            .header("Authorization", &bearer_value(token))
            .send()
            .await
            .map_err(|e| log::warn!("current-user fetch failed: {e}"))
            .ok()?;
        if !resp.ok() {
            log::warn!("current-user fetch rejected: {}", resp.status());
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Percent-encode one `application/x-www-form-urlencoded` component.
#[cfg(any(test, feature = "hydrate"))]
fn form_encode_component(value: &str) -> String {
    use std::fmt::Write as _;

    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            b' ' => out.push('+'),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

#[cfg(any(test, feature = "hydrate"))]
fn login_form_body(credentials: &LoginCredentials) -> String {
    format!(
        "username={}&password={}",
        form_encode_component(&credentials.username),
        form_encode_component(&credentials.password)
    )
}

/// Error body sent by the backend on rejections.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ServerError {
    #[serde(default)]
    detail: Option<String>,
}

/// Success envelope of the register endpoint.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ServerMessage {
    #[serde(default)]
    data: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn rejection_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ServerError>(body)
        .ok()
        .and_then(|e| e.detail)
        .unwrap_or_else(|| fallback.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_token_response(status: u16, body: &str) -> Result<TokenPair, AuthError> {
    if !(200..300).contains(&status) {
        return Err(AuthError::Rejected {
            status,
            message: rejection_message(body, "Sign-in failed. Check your credentials."),
        });
    }
    let pair: TokenPair = serde_json::from_str(body)
        .map_err(|e| AuthError::Network(format!("malformed token response: {e}")))?;
    if pair.access_token.is_empty() {
        return Err(AuthError::Network("token response carried no access token".to_owned()));
    }
    Ok(pair)
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_register_response(status: u16, body: &str) -> Result<String, AuthError> {
    if !(200..300).contains(&status) {
        return Err(AuthError::Rejected {
            status,
            message: rejection_message(body, "Registration failed."),
        });
    }
    let message = serde_json::from_str::<ServerMessage>(body)
        .ok()
        .and_then(|m| m.data)
        .unwrap_or_else(|| "Registration complete.".to_owned());
    Ok(message)
}
