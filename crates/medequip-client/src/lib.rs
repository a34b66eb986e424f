//! Medical Equipment Inventory Client
//!
//! Everything the browser front end needs that does not touch the DOM:
//! - models: wire types for items, inventory records and orders
//! - api: typed REST client over a pluggable transport
//! - views: per-page state machines and the async loads/mutations behind them
//! - format: currency strings and stock badges

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod views;

#[cfg(test)]
mod testing;

pub use api::{ApiClient, ApiRequest, HttpTransport, RawResponse, Response, Transport};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, FormError};
