//! Scripted transport and authenticator for testing
//!
//! Lets unit tests exercise the dispatcher and the group wrappers without a
//! server: responses are queued up front and every request is recorded for
//! assertions.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{HeaderName, HeaderValue};
use tokio::sync::Mutex;

use super::auth::{Authenticator, Session};
use super::context::RestContext;
use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::error::{ApiError, Result};

/// One queued reply
#[derive(Debug, Clone)]
enum Scripted {
    Response(HttpResponse),
    TransportError(String),
}

/// Mock transport returning queued replies in order.
///
/// # Example
/// ```ignore
/// let transport = MockTransport::new();
/// transport.push_response(StatusCode::CREATED, r#"{"id":"g:cam:eng"}"#).await;
///
/// let response = transport.send(request).await?;
/// assert_eq!(transport.requests().await.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    /// Replies handed out in FIFO order
    script: Arc<Mutex<VecDeque<Scripted>>>,
    /// Captured requests for test assertions
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a status and body
    pub async fn push_response(&self, status: StatusCode, body: &str) {
        self.script
            .lock()
            .await
            .push_back(Scripted::Response(HttpResponse::new(status, body)));
    }

    /// Queue a response carrying one extra header
    pub async fn push_response_with_header(
        &self,
        status: StatusCode,
        body: &str,
        name: &str,
        value: &str,
    ) {
        let mut response = HttpResponse::new(status, body);
        response.headers.append(
            HeaderName::from_bytes(name.as_bytes()).unwrap(),
            HeaderValue::from_str(value).unwrap(),
        );
        self.script
            .lock()
            .await
            .push_back(Scripted::Response(response));
    }

    /// Queue a connection failure
    pub async fn push_transport_error(&self, message: &str) {
        self.script
            .lock()
            .await
            .push_back(Scripted::TransportError(message.to_string()));
    }

    /// All requests seen so far
    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().await.push(request);

        match self.script.lock().await.pop_front() {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::TransportError(message)) => Err(ApiError::Transport {
                message,
                response: None,
            }
            .into()),
            None => Err(ApiError::Transport {
                message: "mock transport has no scripted reply".to_string(),
                response: None,
            }
            .into()),
        }
    }
}

/// Authenticator returning a fixed session, or failing every switch
#[derive(Clone)]
pub struct MockAuthenticator {
    session: Option<Session>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAuthenticator {
    /// Always succeeds with the given session
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Some(session),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always fails with an authentication error
    pub fn failing() -> Self {
        Self {
            session: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Principals that were switched to, in call order
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn switch_user(&self, ctx: &RestContext, _transport: &dyn Transport) -> Result<Session> {
        self.calls.lock().await.push(ctx.principal().to_string());
        match &self.session {
            Some(session) => Ok(session.clone()),
            None => Err(ApiError::Authentication {
                user: ctx.principal().to_string(),
                reason: "login rejected".to_string(),
                response: None,
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::context::Tenant;
    use reqwest::{Method, Url};

    fn request() -> HttpRequest {
        HttpRequest::new(Method::GET, Url::parse("http://cam.oae.com/api/group/g").unwrap())
    }

    #[tokio::test]
    async fn test_mock_transport_replays_in_order() {
        let transport = MockTransport::new();
        transport.push_response(StatusCode::OK, "first").await;
        transport.push_transport_error("boom").await;

        let first = transport.send(request()).await.unwrap();
        assert_eq!(first.body, "first");

        let second = transport.send(request()).await.unwrap_err();
        assert!(second.to_string().contains("boom"));

        assert_eq!(transport.requests().await.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_transport_without_script_fails() {
        let transport = MockTransport::new();
        assert!(transport.send(request()).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_authenticator_records_principals() {
        let auth = MockAuthenticator::with_session(Session::anonymous());
        let transport = MockTransport::new();
        let ctx = RestContext::anonymous(Tenant::new("cam.oae.com"));

        auth.switch_user(&ctx, &transport).await.unwrap();
        assert_eq!(auth.calls().await, vec!["anonymous".to_string()]);

        let failing = MockAuthenticator::failing();
        assert!(failing.switch_user(&ctx, &transport).await.is_err());
    }
}
