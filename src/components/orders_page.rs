//! Orders Page
//!
//! Read-only order history and the weekly summary for the chosen window.

use leptos::prelude::*;
use leptos::task::spawn_local;
use medequip_client::format::currency;
use medequip_client::views::{orders, OrderRow, OrdersView, WeeklyRow, WEEK_WINDOWS};

use crate::components::NoticeBanner;
use crate::context::use_app_context;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(OrdersView::new());
    let weeks = Memo::new(move |_| state.with(|s| s.weeks()));

    // Refetch whenever the window changes
    Effect::new(move |_| {
        let weeks = weeks.get();
        tracing::debug!(weeks, "loading order history");
        state.update(|s| s.load_started());
        let api = ctx.api();
        spawn_local(async move {
            let result = orders::fetch(&api, weeks).await;
            state.update(|s| s.load_finished(result));
        });
    });

    let first_load = Memo::new(move |_| state.with(|s| s.is_loading() && s.orders().is_empty()));
    let notice = Memo::new(move |_| state.with(|s| s.notice().cloned()));
    let weekly = Memo::new(move |_| state.with(|s| s.weekly_rows()));
    let rows = Memo::new(move |_| state.with(|s| s.rows()));
    let totals = Memo::new(move |_| state.with(|s| s.weekly_totals()));

    view! {
        <div>
            <NoticeBanner notice=notice on_dismiss=move |_: ()| state.update(|s| s.dismiss_notice())/>
            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">"Weekly Summary"</h2>
                    <select
                        class="input input-inline"
                        prop:value=move || weeks.get().to_string()
                        on:change=move |ev| {
                            if let Ok(w) = event_target_value(&ev).parse::<u32>() {
                                state.update(|s| s.set_weeks(w));
                            }
                        }
                    >
                        {WEEK_WINDOWS.iter().map(|w| {
                            view! { <option value=w.to_string()>{format!("Last {} weeks", w)}</option> }
                        }).collect_view()}
                    </select>
                </div>
                <p class="summary-line">
                    {move || {
                        let t = totals.get();
                        format!("{} orders, {} total", t.orders, currency(t.revenue))
                    }}
                </p>
                <WeeklyTable rows=weekly/>
            </div>
            {move || if first_load.get() {
                view! { <div class="card">"Loading..."</div> }.into_any()
            } else {
                view! {
                    <div class="card">
                        <div class="card-header">
                            <h2 class="card-title">"Historical Orders"</h2>
                        </div>
                        <OrdersTable rows=rows/>
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[component]
fn WeeklyTable(rows: Memo<Vec<WeeklyRow>>) -> impl IntoView {
    move || {
        let rows = rows.get();
        if rows.is_empty() {
            return view! { <p>"No orders in this period."</p> }.into_any();
        }

        view! {
            <table class="table">
                <thead>
                    <tr>
                        <th>"Week"</th>
                        <th>"Orders"</th>
                        <th>"Revenue"</th>
                        <th>"Items Ordered"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| view! {
                        <tr>
                            <td>{row.week}</td>
                            <td>{row.orders}</td>
                            <td>{row.revenue}</td>
                            <td>{row.top_items}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        }.into_any()
    }
}

#[component]
fn OrdersTable(rows: Memo<Vec<OrderRow>>) -> impl IntoView {
    move || {
        let rows = rows.get();
        if rows.is_empty() {
            return view! { <p>"No orders found."</p> }.into_any();
        }

        view! {
            <table class="table">
                <thead>
                    <tr>
                        <th>"Order #"</th>
                        <th>"Date"</th>
                        <th>"Items"</th>
                        <th>"Units"</th>
                        <th>"Total"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| view! {
                        <tr>
                            <td>{row.id}</td>
                            <td>{row.date}</td>
                            <td>
                                <ul class="order-lines">
                                    {row.lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                                </ul>
                            </td>
                            <td>{row.units}</td>
                            <td>{row.total}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        }.into_any()
    }
}
