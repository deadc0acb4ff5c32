//! REST helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): inert stubs, since sign-in only ever happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed `ApiError` so pages can route failures into
//! `AuthState::set_error` verbatim. `Rejected` means the backend refused
//! the request (bad credentials, dead token); `Http` covers transport and
//! decoding problems.

#![allow(clippy::unused_async)]

use super::types::{ApiError, Credentials, User};
#[cfg(feature = "hydrate")]
use super::types::{AuthResponsePayload, UserPayload};

#[cfg(feature = "hydrate")]
fn http_err(e: impl std::fmt::Display) -> ApiError {
    ApiError::Http(e.to_string())
}

/// Sign in with email and password.
///
/// # Errors
///
/// `Rejected` when the backend refuses the credentials, `Http` on
/// transport failure, `UnknownRole` if the payload carries a role outside
/// the closed set.
pub async fn login(email: &str, password: &str) -> Result<Credentials, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&LoginRequest { email, password })
            .map_err(http_err)?
            .send()
            .await
            .map_err(http_err)?;
        if !resp.ok() {
            return Err(ApiError::Rejected(format!(
                "sign-in failed ({})",
                resp.status()
            )));
        }
        let payload: AuthResponsePayload = resp.json().await.map_err(http_err)?;
        Credentials::try_from(payload)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Http("not available on server".to_owned()))
    }
}

/// Create an account; the backend signs the new user in directly.
///
/// # Errors
///
/// Same taxonomy as [`login`].
pub async fn register(name: &str, email: &str, password: &str) -> Result<Credentials, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct RegisterRequest<'a> {
            name: &'a str,
            email: &'a str,
            password: &'a str,
        }

        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&RegisterRequest {
                name,
                email,
                password,
            })
            .map_err(http_err)?
            .send()
            .await
            .map_err(http_err)?;
        if !resp.ok() {
            return Err(ApiError::Rejected(format!(
                "registration failed ({})",
                resp.status()
            )));
        }
        let payload: AuthResponsePayload = resp.json().await.map_err(http_err)?;
        Credentials::try_from(payload)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err(ApiError::Http("not available on server".to_owned()))
    }
}

/// Request a password-reset email.
///
/// # Errors
///
/// `Rejected` or `Http`, as for [`login`].
pub async fn forgot_password(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct ForgotPasswordRequest<'a> {
            email: &'a str,
        }

        let resp = gloo_net::http::Request::post("/api/auth/forgot-password")
            .json(&ForgotPasswordRequest { email })
            .map_err(http_err)?
            .send()
            .await
            .map_err(http_err)?;
        if !resp.ok() {
            return Err(ApiError::Rejected(format!(
                "request failed ({})",
                resp.status()
            )));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Http("not available on server".to_owned()))
    }
}

/// Set a new password using the token from the reset email.
///
/// # Errors
///
/// `Rejected` or `Http`, as for [`login`].
pub async fn reset_password(token: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct ResetPasswordRequest<'a> {
            token: &'a str,
            password: &'a str,
        }

        let resp = gloo_net::http::Request::post("/api/auth/reset-password")
            .json(&ResetPasswordRequest { token, password })
            .map_err(http_err)?
            .send()
            .await
            .map_err(http_err)?;
        if !resp.ok() {
            return Err(ApiError::Rejected(format!(
                "reset failed ({})",
                resp.status()
            )));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, password);
        Err(ApiError::Http("not available on server".to_owned()))
    }
}

/// Fetch the profile for a bearer token restored from a previous session.
///
/// # Errors
///
/// `Rejected` when the token is no longer accepted (callers should drop
/// the session), `Http` on transport failure, `UnknownRole` on a payload
/// outside the closed role set.
pub async fn fetch_current_user(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(http_err)?;
        if !resp.ok() {
            return Err(ApiError::Rejected(format!(
                "token rejected ({})",
                resp.status()
            )));
        }
        let payload: UserPayload = resp.json().await.map_err(http_err)?;
        User::try_from(payload)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Http("not available on server".to_owned()))
    }
}
