//! Quantity Badge Component

use leptos::prelude::*;
use medequip_client::format::StockBadge;

/// Stock count styled by tier
#[component]
pub fn QuantityBadge(badge: StockBadge, quantity: u32) -> impl IntoView {
    view! { <span class=badge.css_class()>{quantity}</span> }
}
