//! Display Formatting
//!
//! Currency strings and stock badges shared by the views.

use crate::models::Item;

/// Format `amount` as en-US dollars rounded to cents: `$50,000.00`
pub fn currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, whole, cents % 100)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Visual tier of a quantity badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockBadge {
    Success,
    Warning,
    Danger,
}

impl StockBadge {
    /// Items view: anything in stock is fine
    pub fn for_catalog(quantity: u32) -> Self {
        if quantity > 0 {
            StockBadge::Success
        } else {
            StockBadge::Danger
        }
    }

    /// Inventory view: `>5` success, `3..=5` warning, `<=2` danger
    pub fn for_inventory(quantity: u32) -> Self {
        match quantity {
            q if q > 5 => StockBadge::Success,
            3..=5 => StockBadge::Warning,
            _ => StockBadge::Danger,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StockBadge::Success => "badge badge-success",
            StockBadge::Warning => "badge badge-warning",
            StockBadge::Danger => "badge badge-danger",
        }
    }
}

/// Picker label: `MRI Scanner - $1,500,000.00`
pub fn item_option_label(item: &Item) -> String {
    format!("{} - {}", item.name, currency(item.cost))
}

pub fn description_or_na(item: &Item) -> String {
    match item.description.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => "N/A".to_string(),
    }
}
