//! Test Transport
//!
//! Records every request and answers from canned routes. Unrouted requests
//! get a 404 so a missing stub shows up as a failed call, not a hang.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use crate::api::{ApiClient, ApiRequest, RawResponse, Transport};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{InventoryRecord, Item};

type Reply = ApiResult<RawResponse>;

#[derive(Default)]
struct Inner {
    routes: HashMap<(Method, String), Reply>,
    log: Vec<ApiRequest>,
}

/// Shared handle; clones see the same routes and log
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<RefCell<Inner>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client over this transport with the default config
    pub fn client(&self) -> ApiClient<MockTransport> {
        ApiClient::new(self.clone(), &ApiConfig::default())
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: impl Into<String>) {
        self.inner
            .borrow_mut()
            .routes
            .insert((method, path.to_string()), Ok(RawResponse::new(status, body)));
    }

    pub fn respond_json<B: Serialize>(&self, method: Method, path: &str, body: &B) {
        let json = serde_json::to_string(body).unwrap();
        self.respond(method, path, 200, json);
    }

    /// Simulate a request that never gets a response
    pub fn fail(&self, method: Method, path: &str) {
        self.inner.borrow_mut().routes.insert(
            (method, path.to_string()),
            Err(ApiError::Network("connection refused".into())),
        );
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.borrow().log.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.borrow().log.len()
    }

    /// `"METHOD /path"` for each logged request, in order
    pub fn calls(&self) -> Vec<String> {
        self.inner
            .borrow()
            .log
            .iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }

    pub fn clear_log(&self) {
        self.inner.borrow_mut().log.clear();
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, _root: &str, request: ApiRequest) -> ApiResult<RawResponse> {
        let key = (request.method.clone(), request.path.clone());
        let mut inner = self.inner.borrow_mut();
        inner.log.push(request);
        inner
            .routes
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(RawResponse::new(404, r#"{"detail":"Not Found"}"#)))
    }
}

pub fn item(id: u32, name: &str, item_type: &str, cost: f64) -> Item {
    Item {
        id,
        name: name.to_string(),
        item_type: item_type.to_string(),
        cost,
        description: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn record(id: u32, item: &Item, quantity: u32) -> InventoryRecord {
    InventoryRecord {
        id,
        item_id: item.id,
        quantity,
        item: item.clone(),
        created_at: None,
        updated_at: None,
    }
}
