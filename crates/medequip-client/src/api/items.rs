//! Item Endpoints
//!
//! `/items` catalog CRUD.

use super::{ApiClient, ApiRequest, Response, Transport};
use crate::error::ApiResult;
use crate::models::{Item, ItemPayload};

impl<T: Transport> ApiClient<T> {
    pub async fn list_items(&self) -> ApiResult<Response<Vec<Item>>> {
        self.call(ApiRequest::get("/items")).await
    }

    pub async fn get_item(&self, id: u32) -> ApiResult<Response<Item>> {
        self.call(ApiRequest::get(format!("/items/{}", id))).await
    }

    pub async fn create_item(&self, payload: &ItemPayload) -> ApiResult<Response<Item>> {
        self.call(ApiRequest::post("/items").with_json(payload)?).await
    }

    /// Full replace of the item with `id`
    pub async fn update_item(&self, id: u32, payload: &ItemPayload) -> ApiResult<Response<Item>> {
        self.call(ApiRequest::put(format!("/items/{}", id)).with_json(payload)?)
            .await
    }

    pub async fn delete_item(&self, id: u32) -> ApiResult<Response<()>> {
        self.call_unit(ApiRequest::delete(format!("/items/{}", id))).await
    }
}
