//! HTTP transport
//!
//! reqwest uses the browser fetch API on wasm32 and hyper elsewhere.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Request};

use super::{ApiRequest, RawResponse, Transport};
use crate::error::ApiResult;

/// Transport sending requests over the network
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// JSON bodies go through reqwest's serializer, which also sets the
    /// content type; bodyless requests declare it explicitly.
    fn prepare(&self, root: &str, request: ApiRequest) -> reqwest::Result<Request> {
        let url = request.url(root);
        let builder = self.client.request(request.method, &url);
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder.header(CONTENT_TYPE, "application/json"),
        };
        builder.build()
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, root: &str, request: ApiRequest) -> ApiResult<RawResponse> {
        let prepared = self.prepare(root, request)?;
        let response = self.client.execute(prepared).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewInventory;

    const ROOT: &str = "http://localhost:8000/api";

    #[test]
    fn test_json_body_is_serialized() {
        let request = ApiRequest::post("/inventory")
            .with_json(&NewInventory { item_id: 5, quantity: 3 })
            .unwrap();
        let prepared = HttpTransport::new().prepare(ROOT, request).unwrap();

        assert_eq!(prepared.method(), reqwest::Method::POST);
        assert_eq!(prepared.url().as_str(), "http://localhost:8000/api/inventory");
        assert_eq!(prepared.headers()[CONTENT_TYPE], "application/json");
        let body: serde_json::Value =
            serde_json::from_slice(prepared.body().unwrap().as_bytes().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"item_id": 5, "quantity": 3}));
    }

    #[test]
    fn test_bodyless_request_keeps_header() {
        let request = ApiRequest::delete("/inventory/5").with_query("quantity", 2);
        let prepared = HttpTransport::new().prepare(ROOT, request).unwrap();

        assert_eq!(prepared.url().as_str(), "http://localhost:8000/api/inventory/5?quantity=2");
        assert_eq!(prepared.headers()[CONTENT_TYPE], "application/json");
        assert!(prepared.body().is_none());
    }
}
