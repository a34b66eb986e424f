//! Inventory Endpoints
//!
//! `/inventory` records are addressed by their item id, not their own id.

use super::{ApiClient, ApiRequest, Response, Transport};
use crate::error::ApiResult;
use crate::models::{InventoryQuantity, InventoryRecord, NewInventory};

impl<T: Transport> ApiClient<T> {
    /// All records, each with its embedded item
    pub async fn list_inventory(&self) -> ApiResult<Response<Vec<InventoryRecord>>> {
        self.call(ApiRequest::get("/inventory")).await
    }

    pub async fn get_inventory(&self, item_id: u32) -> ApiResult<Response<InventoryRecord>> {
        self.call(ApiRequest::get(format!("/inventory/{}", item_id)))
            .await
    }

    /// Create the record for `item_id` or increment the existing one
    pub async fn add_inventory(&self, body: &NewInventory) -> ApiResult<Response<InventoryRecord>> {
        self.call(ApiRequest::post("/inventory").with_json(body)?).await
    }

    /// Replace the quantity on hand for `item_id`
    pub async fn update_inventory(
        &self,
        item_id: u32,
        body: &InventoryQuantity,
    ) -> ApiResult<Response<InventoryRecord>> {
        self.call(ApiRequest::put(format!("/inventory/{}", item_id)).with_json(body)?)
            .await
    }

    /// Decrement by `quantity`, or drop the whole record when `None`.
    ///
    /// Whether a decrement to zero deletes the record is up to the server.
    pub async fn remove_inventory(&self, item_id: u32, quantity: Option<u32>) -> ApiResult<Response<()>> {
        let mut request = ApiRequest::delete(format!("/inventory/{}", item_id));
        if let Some(q) = quantity {
            request = request.with_query("quantity", q);
        }
        self.call_unit(request).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use crate::models::{InventoryQuantity, NewInventory};
    use crate::testing::{item, record, MockTransport};

    #[tokio::test]
    async fn test_list_and_get() {
        let mri = item(1, "MRI", "MRI Machine", 1.5e6);
        let mock = MockTransport::new();
        mock.respond_json(Method::GET, "/inventory", &vec![record(10, &mri, 2)]);
        mock.respond_json(Method::GET, "/inventory/1", &record(10, &mri, 2));

        let client = mock.client();
        let all = client.list_inventory().await.unwrap();
        assert_eq!(all.data[0].item.name, "MRI");
        let one = client.get_inventory(1).await.unwrap();
        assert_eq!(one.data.quantity, 2);
    }

    #[tokio::test]
    async fn test_add_and_update_bodies() {
        let mri = item(1, "MRI", "MRI Machine", 1.5e6);
        let mock = MockTransport::new();
        mock.respond_json(Method::POST, "/inventory", &record(10, &mri, 3));
        mock.respond_json(Method::PUT, "/inventory/1", &record(10, &mri, 8));

        let client = mock.client();
        client.add_inventory(&NewInventory { item_id: 1, quantity: 3 }).await.unwrap();
        client.update_inventory(1, &InventoryQuantity { quantity: 8 }).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].body.as_ref().unwrap()["item_id"], 1);
        assert_eq!(requests[0].body.as_ref().unwrap()["quantity"], 3);
        assert_eq!(requests[1].body.as_ref().unwrap()["quantity"], 8);
    }

    #[tokio::test]
    async fn test_remove_query_parameter() {
        let mock = MockTransport::new();
        mock.respond(Method::DELETE, "/inventory/1", 200, r#"{"message":"ok"}"#);

        let client = mock.client();
        client.remove_inventory(1, Some(2)).await.unwrap();
        client.remove_inventory(1, None).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].url(client.root()), "http://localhost:8000/api/inventory/1?quantity=2");
        assert_eq!(requests[1].url(client.root()), "http://localhost:8000/api/inventory/1");
    }
}
