//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use medequip_client::{ApiClient, ApiConfig, HttpTransport};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend location, resolved once at startup
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// REST client for the configured backend
    pub fn api(&self) -> ApiClient<HttpTransport> {
        self.config.with_value(ApiClient::http)
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
