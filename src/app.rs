//! Medical Inventory App
//!
//! Navigation shell and routes for the three pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use medequip_client::ApiConfig;

use crate::components::{InventoryPage, ItemsPage, OrdersPage};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    tracing::info!(api = %config.api_root(), "medical inventory front end starting");

    // Provide context to all pages
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <div class="App">
                <nav class="navbar">
                    <div class="nav-container">
                        <h1 class="nav-title">"Medical Inventory Management"</h1>
                        <div class="nav-links">
                            <a href="/" class="nav-link">"Inventory"</a>
                            <a href="/items" class="nav-link">"Items"</a>
                            <a href="/orders" class="nav-link">"Historical Orders"</a>
                        </div>
                    </div>
                </nav>
                <main class="main-content">
                    <Routes fallback=|| view! { <div class="card">"Page not found."</div> }>
                        <Route path=path!("/") view=InventoryPage/>
                        <Route path=path!("/items") view=ItemsPage/>
                        <Route path=path!("/orders") view=OrdersPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
