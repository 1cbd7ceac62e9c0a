//! HTTP boundary to the hosted identity/record provider.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` against the provider
//! gateway. Native builds (tests): stubs that report the network as
//! unavailable, since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! This module is the only place raw provider responses are interpreted.
//! Every failure is translated into the `AuthError` taxonomy here; status
//! codes and provider error bodies never leak to pages or the guard.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use super::types::{AccountRecord, ProfileRecord};
#[cfg(any(test, feature = "csr"))]
use super::types::ProviderErrorBody;
use crate::state::role::Role;
use crate::state::session::AuthError;

#[cfg(any(test, feature = "csr"))]
const SIGN_IN_ENDPOINT: &str = "/auth/v1/sign-in";
#[cfg(any(test, feature = "csr"))]
const SIGN_UP_ENDPOINT: &str = "/auth/v1/sign-up";
#[cfg(any(test, feature = "csr"))]
const SIGN_OUT_ENDPOINT: &str = "/auth/v1/sign-out";
#[cfg(any(test, feature = "csr"))]
const CURRENT_USER_ENDPOINT: &str = "/auth/v1/user";

#[cfg(any(test, feature = "csr"))]
fn profile_endpoint(identity: &str) -> String {
    format!("/rest/v1/profiles/{identity}")
}

#[cfg(any(test, feature = "csr"))]
const PROFILES_ENDPOINT: &str = "/rest/v1/profiles";

/// Translate a failed sign-in response.
#[cfg(any(test, feature = "csr"))]
fn sign_in_error(status: u16, body: &ProviderErrorBody) -> AuthError {
    match status {
        400 | 401 | 422 => AuthError::InvalidCredentials,
        _ => provider_error(status, body),
    }
}

/// Translate a failed sign-up response.
#[cfg(any(test, feature = "csr"))]
fn sign_up_error(status: u16, body: &ProviderErrorBody) -> AuthError {
    if status == 409 || body.error == "user_already_exists" || body.error == "email_exists" {
        AuthError::DuplicateAccount
    } else {
        provider_error(status, body)
    }
}

#[cfg(any(test, feature = "csr"))]
fn provider_error(status: u16, body: &ProviderErrorBody) -> AuthError {
    let detail = body
        .message
        .clone()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            if body.error.is_empty() {
                format!("status {status}")
            } else {
                body.error.clone()
            }
        });
    AuthError::Provider(detail)
}

/// Sign in with email and password.
///
/// # Errors
///
/// `InvalidCredentials` for rejected logins, `NetworkFailure` when the
/// provider is unreachable, `Provider` for anything else.
pub async fn sign_in(email: &str, password: &str) -> Result<AccountRecord, AuthError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(SIGN_IN_ENDPOINT)
            .json(&body)
            .map_err(|_| AuthError::NetworkFailure)?
            .send()
            .await
            .map_err(|_| AuthError::NetworkFailure)?;
        if !resp.ok() {
            let err_body = resp.json::<ProviderErrorBody>().await.unwrap_or_default();
            return Err(sign_in_error(resp.status(), &err_body));
        }
        resp.json::<AccountRecord>().await.map_err(|_| AuthError::NetworkFailure)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(AuthError::NetworkFailure)
    }
}

/// Create a new account.
///
/// # Errors
///
/// `DuplicateAccount` when the email is already registered, plus the usual
/// translation of unreachable/unexpected responses.
pub async fn sign_up(email: &str, password: &str) -> Result<AccountRecord, AuthError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(SIGN_UP_ENDPOINT)
            .json(&body)
            .map_err(|_| AuthError::NetworkFailure)?
            .send()
            .await
            .map_err(|_| AuthError::NetworkFailure)?;
        if !resp.ok() {
            let err_body = resp.json::<ProviderErrorBody>().await.unwrap_or_default();
            return Err(sign_up_error(resp.status(), &err_body));
        }
        resp.json::<AccountRecord>().await.map_err(|_| AuthError::NetworkFailure)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(AuthError::NetworkFailure)
    }
}

/// Invalidate the provider-side session. Best effort; local state is
/// already cleared before this is called.
pub async fn sign_out() {
    #[cfg(feature = "csr")]
    {
        let _ = gloo_net::http::Request::post(SIGN_OUT_ENDPOINT).send().await;
    }
}

/// Look up the currently authenticated account, if any.
/// Returns `None` when signed out, unreachable, or on the native side.
pub async fn current_account() -> Option<AccountRecord> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<AccountRecord>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch the profile row for an identity.
///
/// # Errors
///
/// `ProfileResolutionFailure` for missing or malformed rows,
/// `NetworkFailure` when the provider is unreachable.
pub async fn fetch_profile(identity: &str) -> Result<ProfileRecord, AuthError> {
    #[cfg(feature = "csr")]
    {
        let url = profile_endpoint(identity);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|_| AuthError::NetworkFailure)?;
        if !resp.ok() {
            return Err(AuthError::ProfileResolutionFailure);
        }
        // A row that does not match the schema is as bad as a missing row.
        resp.json::<ProfileRecord>().await.map_err(|_| AuthError::ProfileResolutionFailure)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = identity;
        Err(AuthError::NetworkFailure)
    }
}

/// Create the profile row for a freshly signed-up account.
///
/// # Errors
///
/// `ProfileResolutionFailure` when the provider rejects or mangles the row,
/// `NetworkFailure` when it is unreachable.
pub async fn create_profile(
    identity: &str,
    role: Role,
    display_name: &str,
) -> Result<ProfileRecord, AuthError> {
    #[cfg(feature = "csr")]
    {
        let body = super::types::NewProfileRecord {
            id: identity.to_owned(),
            role: role.as_str().to_owned(),
            display_name: display_name.to_owned(),
        };
        let resp = gloo_net::http::Request::post(PROFILES_ENDPOINT)
            .json(&body)
            .map_err(|_| AuthError::NetworkFailure)?
            .send()
            .await
            .map_err(|_| AuthError::NetworkFailure)?;
        if !resp.ok() {
            return Err(AuthError::ProfileResolutionFailure);
        }
        resp.json::<ProfileRecord>().await.map_err(|_| AuthError::ProfileResolutionFailure)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (identity, role, display_name);
        Err(AuthError::NetworkFailure)
    }
}
