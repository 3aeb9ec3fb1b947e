//! Switching the acting user before a call
//!
//! Every dispatched call first asks an [`Authenticator`] for a [`Session`] for
//! the context's principal. Sessions are per call: nothing is cached between
//! calls, so contexts for different users never share cookies.

use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue, SET_COOKIE};

use super::context::RestContext;
use super::transport::{HttpRequest, Transport};
use crate::error::{ApiError, Error, Result};

/// Authentication state attached to one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    cookie: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session carried by a `Cookie` header value
    pub fn with_cookie(cookie: impl Into<String>) -> Self {
        Self {
            cookie: Some(cookie.into()),
        }
    }

    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.cookie.is_none()
    }

    /// Add the session's headers to an outgoing request
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        if let Some(cookie) = &self.cookie {
            let value = HeaderValue::from_str(cookie).map_err(|e| {
                ApiError::InvalidResponse(format!("Session cookie is not a valid header: {}", e))
            })?;
            headers.insert(COOKIE, value);
        }
        Ok(())
    }
}

/// Establishes the acting principal's session against the tenant
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Switch to the context's user. Anonymous contexts get an anonymous session.
    async fn switch_user(&self, ctx: &RestContext, transport: &dyn Transport) -> Result<Session>;
}

/// Logs in through `POST /api/auth/login` and keeps the returned cookies
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginAuthenticator;

#[async_trait]
impl Authenticator for LoginAuthenticator {
    async fn switch_user(&self, ctx: &RestContext, transport: &dyn Transport) -> Result<Session> {
        let Some(user) = ctx.user() else {
            return Ok(Session::anonymous());
        };

        let url = ctx.url_for(&["api", "auth", "login"])?;
        debug!("Logging in as {} on {}", user.user_id, ctx.tenant().base_url());

        let mut request = HttpRequest::new(Method::POST, url);
        request.form = vec![
            ("username".to_string(), user.user_id.clone()),
            ("password".to_string(), user.password.clone()),
        ];

        let response = match transport.send(request).await {
            Ok(response) => response,
            Err(Error::Api(ApiError::Transport { message, response })) => {
                return Err(ApiError::Authentication {
                    user: user.user_id.clone(),
                    reason: message,
                    response,
                }
                .into());
            }
            Err(err) => return Err(err),
        };

        if !response.status.is_success() {
            return Err(ApiError::Authentication {
                user: user.user_id.clone(),
                reason: format!("login returned {}: {}", response.status, response.body),
                response: Some(response.meta()),
            }
            .into());
        }

        let cookie = session_cookie(&response.headers).ok_or_else(|| ApiError::Authentication {
            user: user.user_id.clone(),
            reason: "login response did not set a session cookie".to_string(),
            response: Some(response.meta()),
        })?;

        Ok(Session::with_cookie(cookie))
    }
}

/// Join the `name=value` part of every `Set-Cookie` header into one `Cookie` value
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let cookies: Vec<&str> = headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();

    if cookies.is_empty() {
        None
    } else {
        Some(cookies.join("; "))
    }
}
