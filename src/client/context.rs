//! Execution context: the tenant a call targets and the principal making it

use std::fmt;

use reqwest::Url;

use crate::error::{ApiError, Result};

/// A tenant on the platform, identified by its base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    base_url: String,
}

impl Tenant {
    /// Create a tenant from a base URL such as `cam.oae.com` or `https://cam.oae.com`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The base URL as configured
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Parse the base URL. A bare host is served over plain http.
    pub fn url(&self) -> Result<Url> {
        let raw = self.base_url.trim();
        if raw.is_empty() {
            return Err(ApiError::InvalidContext("tenant base URL is empty".to_string()).into());
        }

        let with_scheme = if raw.contains("://") {
            raw.to_string()
        } else {
            format!("http://{}", raw)
        };

        let url = Url::parse(&with_scheme).map_err(|e| {
            ApiError::InvalidContext(format!("invalid tenant base URL '{}': {}", raw, e))
        })?;
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidContext(format!(
                "tenant base URL '{}' cannot carry a path",
                raw
            ))
            .into());
        }
        Ok(url)
    }
}

/// Login credentials of the acting user
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user_id: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Tenant plus acting principal for a single API call.
///
/// Contexts are plain immutable values: build one per tenant/user pair and
/// pass it by reference into every operation. Nothing about a call is kept
/// on the context, so the same value can back any number of concurrent calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestContext {
    tenant: Tenant,
    user: Option<Credentials>,
}

impl RestContext {
    /// Context for an anonymous visitor of the tenant
    pub fn anonymous(tenant: Tenant) -> Self {
        Self { tenant, user: None }
    }

    /// Context acting as the given user
    pub fn as_user(tenant: Tenant, user: Credentials) -> Self {
        Self {
            tenant,
            user: Some(user),
        }
    }

    pub fn tenant(&self) -> &Tenant {
        &self.tenant
    }

    /// Credentials of the acting user, `None` when anonymous
    pub fn user(&self) -> Option<&Credentials> {
        self.user.as_ref()
    }

    /// Printable name of the acting principal
    pub fn principal(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.user_id.as_str())
            .unwrap_or("anonymous")
    }

    /// Absolute URL for a route under the tenant.
    ///
    /// Each segment is encoded as exactly one path segment, so ids containing
    /// `/` or spaces cannot escape their position in the route.
    pub fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.tenant.url()?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidContext("tenant base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
