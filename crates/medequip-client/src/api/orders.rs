//! Order Endpoints
//!
//! Historical orders and the weekly aggregate.

use super::{ApiClient, ApiRequest, Response, Transport, DEFAULT_STATS_WEEKS};
use crate::error::ApiResult;
use crate::models::{NewOrder, Order, WeeklyOrderStats};

impl<T: Transport> ApiClient<T> {
    /// Orders, newest first as returned by the server
    pub async fn list_orders(&self) -> ApiResult<Response<Vec<Order>>> {
        self.call(ApiRequest::get("/orders")).await
    }

    pub async fn create_order(&self, order: &NewOrder) -> ApiResult<Response<Order>> {
        self.call(ApiRequest::post("/orders").with_json(order)?).await
    }

    /// Orders bucketed by week over the last `weeks` weeks (12 when `None`)
    pub async fn weekly_stats(&self, weeks: Option<u32>) -> ApiResult<Response<Vec<WeeklyOrderStats>>> {
        let weeks = weeks.unwrap_or(DEFAULT_STATS_WEEKS);
        self.call(ApiRequest::get("/orders/stats/weekly").with_query("weeks", weeks))
            .await
    }
}
