//! REST Client
//!
//! One method per backend operation, organized by resource. The client is a
//! direct pass-through: no retries, no caching, no timeout override.
//!
//! Requests are built as plain [`ApiRequest`] values and handed to a
//! [`Transport`]; [`HttpTransport`] sends them with reqwest, tests swap in a
//! recording transport.

mod http;
mod inventory;
mod items;
mod orders;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

pub use http::HttpTransport;

/// Default window for the weekly order statistics
pub const DEFAULT_STATS_WEEKS: u32 = 12;

/// A request relative to the API root
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below `{API_URL}/api`, starting with `/`
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub fn with_json<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Absolute URL under `root` (which already ends in `/api`).
    ///
    /// Query values are numeric, so they are appended without escaping.
    pub fn url(&self, root: &str) -> String {
        let mut url = format!("{}{}", root.trim_end_matches('/'), self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

/// Status and body of an HTTP response, before decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Decoded result of a successful call
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub data: T,
    pub status: u16,
}

/// Something that can carry an [`ApiRequest`] to the backend.
///
/// `?Send` because browser futures are single-threaded.
#[async_trait(?Send)]
pub trait Transport {
    /// Send the request; only a missing response is an error here
    async fn send(&self, root: &str, request: ApiRequest) -> ApiResult<RawResponse>;
}

/// Typed client over the items, inventory and orders resources
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    root: String,
}

impl ApiClient<HttpTransport> {
    /// Client over HTTP using `config`
    pub fn http(config: &ApiConfig) -> Self {
        Self::new(HttpTransport::new(), config)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: &ApiConfig) -> Self {
        Self {
            transport,
            root: config.api_root(),
        }
    }

    /// `{API_URL}/api`
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn dispatch(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let method = request.method.clone();
        let path = request.path.clone();
        tracing::debug!(%method, %path, "api request");

        let raw = self.transport.send(&self.root, request).await?;
        if raw.is_success() {
            Ok(raw)
        } else {
            let err = ApiError::from_status(raw.status, &raw.body);
            tracing::debug!(%method, %path, status = raw.status, "api request rejected");
            Err(err)
        }
    }

    /// Send and decode the JSON body as `U`
    async fn call<U: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<Response<U>> {
        let raw = self.dispatch(request).await?;
        let data = serde_json::from_str(&raw.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Response {
            data,
            status: raw.status,
        })
    }

    /// Send and ignore the acknowledgement body
    async fn call_unit(&self, request: ApiRequest) -> ApiResult<Response<()>> {
        let raw = self.dispatch(request).await?;
        Ok(Response {
            data: (),
            status: raw.status,
        })
    }
}
