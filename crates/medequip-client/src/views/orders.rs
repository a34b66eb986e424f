//! Orders View State
//!
//! Read-only: historical orders plus the weekly aggregate over a window.

use crate::api::{ApiClient, Transport, DEFAULT_STATS_WEEKS};
use crate::error::ApiResult;
use crate::format;
use crate::models::{Order, WeeklyOrderStats};

use super::{clear_load_failure, Notice};

const LOAD_FAILED: &str = "Error loading order history";
const MAX_WEEKS: u32 = 104;

/// Windows offered in the week picker
pub const WEEK_WINDOWS: &[u32] = &[4, 8, 12, 26, 52];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrdersData {
    pub orders: Vec<Order>,
    pub weekly: Vec<WeeklyOrderStats>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub id: u32,
    /// Calendar date part of `order_date`
    pub date: String,
    pub total: String,
    pub units: u32,
    /// "MRI × 2" per line
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyRow {
    pub week: String,
    pub orders: u32,
    pub revenue: String,
    /// Item names by units ordered, most first
    pub top_items: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeeklyTotals {
    pub orders: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrdersView {
    orders: Vec<Order>,
    weekly: Vec<WeeklyOrderStats>,
    weeks: u32,
    loading: bool,
    notice: Option<Notice>,
}

impl Default for OrdersView {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            weekly: Vec::new(),
            weeks: DEFAULT_STATS_WEEKS,
            loading: true,
            notice: None,
        }
    }
}

impl OrdersView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn weeks(&self) -> u32 {
        self.weeks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn load_started(&mut self) {
        self.loading = true;
    }

    pub fn load_finished(&mut self, result: ApiResult<OrdersData>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.orders = data.orders;
                self.weekly = data.weekly;
                clear_load_failure(&mut self.notice);
            }
            Err(err) => {
                tracing::error!(error = %err, "Error loading order history");
                self.notice = Some(Notice::load_failed(LOAD_FAILED));
            }
        }
    }

    /// Change the stats window; the caller refetches
    pub fn set_weeks(&mut self, weeks: u32) {
        self.weeks = weeks.clamp(1, MAX_WEEKS);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn rows(&self) -> Vec<OrderRow> {
        self.orders
            .iter()
            .map(|order| OrderRow {
                id: order.id,
                date: order.order_date.split('T').next().unwrap_or_default().to_string(),
                total: format::currency(order.total_amount),
                units: order.unit_count(),
                lines: order
                    .order_items
                    .iter()
                    .map(|line| format!("{} × {}", line.item.name, line.quantity))
                    .collect(),
            })
            .collect()
    }

    pub fn weekly_rows(&self) -> Vec<WeeklyRow> {
        self.weekly
            .iter()
            .map(|week| {
                let mut counts: Vec<(&String, &u32)> = week.item_counts.iter().collect();
                counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
                let top_items = counts
                    .iter()
                    .map(|(name, count)| format!("{} ({})", name, count))
                    .collect::<Vec<_>>()
                    .join(", ");
                WeeklyRow {
                    week: format!("{} – {}", week.week_start, week.week_end),
                    orders: week.total_orders,
                    revenue: format::currency(week.total_amount),
                    top_items,
                }
            })
            .collect()
    }

    pub fn weekly_totals(&self) -> WeeklyTotals {
        self.weekly.iter().fold(WeeklyTotals::default(), |acc, week| WeeklyTotals {
            orders: acc.orders + week.total_orders,
            revenue: acc.revenue + week.total_amount,
        })
    }
}

/// Load orders and the weekly series concurrently
pub async fn fetch<T: Transport>(api: &ApiClient<T>, weeks: u32) -> ApiResult<OrdersData> {
    let (orders, weekly) = futures::try_join!(api.list_orders(), api.weekly_stats(Some(weeks)))?;
    Ok(OrdersData {
        orders: orders.data,
        weekly: weekly.data,
    })
}
