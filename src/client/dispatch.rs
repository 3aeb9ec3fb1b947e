//! Request dispatch and response normalization
//!
//! [`RestClient::dispatch`] is the single path every group operation takes:
//! switch to the acting user, send one request, then turn the raw response
//! into either a [`Reply`] or an [`ApiError`]. There are no retries; each call
//! completes exactly once.

use std::sync::Arc;

use log::debug;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::auth::{Authenticator, LoginAuthenticator};
use super::context::RestContext;
use super::endpoint::Endpoint;
use super::payload::Payload;
use super::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::error::{ApiError, Result};

/// A response whose status the endpoint accepts
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    /// Parsed JSON body; `None` when the body was blank or the endpoint ignores it
    pub body: Option<Value>,
}

impl Reply {
    /// The parsed body; `None` when the server sent none
    pub fn into_body(self) -> Option<Value> {
        self.body
    }

    /// Deserialize the body into a concrete type, if one was sent
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<Option<T>> {
        self.body
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into())
    }
}

/// OAE REST client.
///
/// Holds no per-user state: the tenant and acting user come from the
/// [`RestContext`] passed to each call. Cloning is cheap and clones share the
/// underlying transport.
#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn Transport>,
    authenticator: Arc<dyn Authenticator>,
}

impl RestClient {
    /// Client using reqwest and the login endpoint for user switching
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(Arc::new(ReqwestTransport::new()?)))
    }

    /// Client over a custom transport, logging in with [`LoginAuthenticator`]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self::with_parts(transport, Arc::new(LoginAuthenticator))
    }

    /// Client over a custom transport and authenticator
    pub fn with_parts(transport: Arc<dyn Transport>, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            transport,
            authenticator,
        }
    }

    /// Send one request for `endpoint` to the route built from `segments`.
    ///
    /// For GET endpoints the payload becomes the query string, otherwise it is
    /// sent as a form body. The acting user is switched to first; if that
    /// fails the request itself is never sent.
    pub async fn dispatch(
        &self,
        ctx: &RestContext,
        endpoint: Endpoint,
        segments: &[&str],
        payload: Option<&Payload>,
    ) -> Result<Reply> {
        let method = endpoint.method();
        let mut url = ctx.url_for(segments)?;

        let pairs = payload.map(Payload::to_pairs).unwrap_or_default();
        let form = if method == Method::GET {
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
            Vec::new()
        } else {
            pairs
        };

        let session = self
            .authenticator
            .switch_user(ctx, self.transport.as_ref())
            .await?;

        let mut request = HttpRequest::new(method.clone(), url);
        request.form = form;
        session.apply(&mut request.headers)?;

        debug!("{} {} as {}", method, request.url, ctx.principal());
        let response = self.transport.send(request).await?;
        debug!("{:?} answered {}", endpoint, response.status);

        classify(endpoint, response)
    }
}

/// Map a raw response onto the endpoint's success policy
fn classify(endpoint: Endpoint, response: HttpResponse) -> Result<Reply> {
    let meta = response.meta();

    if !endpoint.accepts(response.status) {
        return Err(ApiError::UnexpectedStatus {
            message: endpoint.failure_message().to_string(),
            body: response.body,
            response: meta,
        }
        .into());
    }

    let body = if !endpoint.parses_body() || response.body.trim().is_empty() {
        None
    } else {
        let value = serde_json::from_str(&response.body).map_err(|e| {
            ApiError::InvalidResponse(format!(
                "Failed to parse response ({}): {}",
                meta.status, e
            ))
        })?;
        Some(value)
    };

    Ok(Reply {
        status: meta.status,
        body,
    })
}
