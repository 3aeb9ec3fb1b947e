//! HTTP transport abstraction
//!
//! The dispatcher only speaks [`HttpRequest`] / [`HttpResponse`]; socket I/O
//! lives behind the [`Transport`] trait so tests and embedders can swap it.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client as HttpClient, Method, StatusCode, Url};

use crate::error::{ApiError, ResponseMeta, Result};

/// A fully assembled request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL, query string included
    pub url: Url,
    pub headers: HeaderMap,
    /// Form fields, sent as `application/x-www-form-urlencoded` for non-GET requests
    pub form: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            form: Vec::new(),
        }
    }

    /// Value of a form field (first occurrence)
    pub fn form_value(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A received response with its body read to text
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Status and headers for error diagnostics
    pub fn meta(&self) -> ResponseMeta {
        ResponseMeta {
            status: self.status,
            headers: self.headers.clone(),
        }
    }
}

/// Performs a single HTTP exchange.
///
/// Implementations return `ApiError::Transport` when no response could be
/// obtained and must not interpret the status code.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`Transport`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: HttpClient,
}

impl ReqwestTransport {
    /// Create a transport with reqwest's default settings
    pub fn new() -> Result<Self> {
        let http = HttpClient::builder().build().map_err(ApiError::from)?;
        Ok(Self { http })
    }

    /// Wrap an already configured reqwest client
    pub fn with_client(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            form,
        } = request;

        let mut builder = self.http.request(method.clone(), url).headers(headers);
        if method != Method::GET {
            builder = builder.form(&form);
        }

        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(|e| ApiError::Transport {
            message: format!("Failed to read response body: {}", e),
            response: Some(ResponseMeta {
                status,
                headers: headers.clone(),
            }),
        })?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
