//! Inventory Page
//!
//! Stock levels per item, with add and remove modals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use medequip_client::format::item_option_label;
use medequip_client::views::{inventory, InventoryCommand, InventoryModal, InventoryRow, InventoryView};

use crate::components::{Modal, NoticeBanner, QuantityBadge};
use crate::context::use_app_context;

/// Which modal is open, without the field values that change on every keystroke
#[derive(Debug, Clone, PartialEq)]
enum ModalKind {
    Add,
    Remove { name: String, current: u32 },
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(InventoryView::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        tracing::debug!(trigger, "loading inventory page");
        state.update(|s| s.load_started());
        let api = ctx.api();
        spawn_local(async move {
            let result = inventory::fetch(&api).await;
            state.update(|s| s.load_finished(result));
        });
    });

    let run_command = move |command: InventoryCommand| {
        let api = ctx.api();
        spawn_local(async move {
            match inventory::execute(&api, &command).await {
                Ok(()) => {
                    state.update(|s| s.mutation_succeeded());
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(err) => state.update(|s| s.mutation_failed(&command, &err)),
            }
        });
    };

    let submit_form = move || {
        if let Some(Ok(command)) = state.try_update(|s| s.prepare_submit()) {
            run_command(command);
        }
    };

    let first_load = Memo::new(move |_| state.with(|s| s.is_loading() && s.inventory().is_empty()));
    let page_notice = Memo::new(move |_| state.with(|s| s.page_notice().cloned()));
    let rows = Memo::new(move |_| state.with(|s| s.rows()));

    view! {
        <div>
            <NoticeBanner notice=page_notice on_dismiss=move |_: ()| state.update(|s| s.dismiss_notice())/>
            {move || if first_load.get() {
                view! { <div class="card">"Loading..."</div> }.into_any()
            } else {
                view! {
                    <div class="card">
                        <div class="card-header">
                            <h2 class="card-title">"Current Inventory"</h2>
                            <button
                                class="button button-primary"
                                on:click=move |_| state.update(|s| s.open_add())
                            >
                                "Add to Inventory"
                            </button>
                        </div>
                        <InventoryTable rows=rows state=state/>
                    </div>
                }.into_any()
            }}
            <InventoryModalView state=state on_submit=move |_: ()| submit_form()/>
        </div>
    }
}

#[component]
fn InventoryTable(rows: Memo<Vec<InventoryRow>>, state: RwSignal<InventoryView>) -> impl IntoView {
    move || {
        let rows = rows.get();
        if rows.is_empty() {
            return view! { <p>"No items in inventory. Add items to get started."</p> }.into_any();
        }

        view! {
            <table class="table">
                <thead>
                    <tr>
                        <th>"Item Name"</th>
                        <th>"Type"</th>
                        <th>"Cost"</th>
                        <th>"Quantity"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| {
                        let record = row.record.clone();
                        view! {
                            <tr>
                                <td>{row.record.item.name}</td>
                                <td>{row.record.item.item_type}</td>
                                <td>{row.cost}</td>
                                <td><QuantityBadge badge=row.badge quantity=row.record.quantity/></td>
                                <td>
                                    <button
                                        class="button button-danger button-small"
                                        on:click=move |_| state.update(|s| s.open_remove(&record))
                                    >
                                        "Remove"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        }.into_any()
    }
}

#[component]
fn InventoryModalView(
    state: RwSignal<InventoryView>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let kind = Memo::new(move |_| {
        state.with(|s| {
            s.modal().map(|modal| match modal {
                InventoryModal::Add { .. } => ModalKind::Add,
                InventoryModal::Remove { record, .. } => ModalKind::Remove {
                    name: record.item.name.clone(),
                    current: record.quantity,
                },
            })
        })
    });
    let options = Memo::new(move |_| {
        state.with(|s| {
            s.items()
                .iter()
                .map(|item| (item.id, item_option_label(item)))
                .collect::<Vec<_>>()
        })
    });
    let selected = move || {
        state.with(|s| match s.modal() {
            Some(InventoryModal::Add { item_id: Some(id), .. }) => id.to_string(),
            _ => String::new(),
        })
    };
    let modal_notice = Memo::new(move |_| state.with(|s| s.modal_notice().cloned()));
    let dismiss = move |_: ()| state.update(|s| s.dismiss_notice());
    let quantity = move || state.with(|s| s.modal().map(|m| m.quantity().to_string()).unwrap_or_default());
    let set_quantity = move |v: String| state.update(|s| s.set_quantity(v));
    let close = move || state.update(|s| s.close_modal());

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    move || match kind.get() {
        None => ().into_any(),
        Some(ModalKind::Add) => view! {
            <Modal title="Add Item to Inventory" on_close=move |_: ()| close()>
                <NoticeBanner notice=modal_notice on_dismiss=dismiss/>
                <form on:submit=on_form_submit>
                    <div class="form-group">
                        <label class="form-label">"Select Item"</label>
                        <select
                            class="input"
                            required=true
                            prop:value=selected
                            on:change=move |ev| {
                                let id = event_target_value(&ev).parse::<u32>().ok();
                                state.update(|s| s.select_item(id));
                            }
                        >
                            <option value="">"Choose an item..."</option>
                            {move || options.get().into_iter().map(|(id, label)| {
                                view! { <option value=id.to_string()>{label}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label class="form-label">"Quantity"</label>
                        <input
                            type="number"
                            class="input"
                            required=true
                            min="1"
                            prop:value=quantity
                            on:input=move |ev| set_quantity(event_target_value(&ev))
                        />
                    </div>
                    <div class="button-group">
                        <button type="submit" class="button button-primary">"Add to Inventory"</button>
                        <button type="button" class="button button-secondary" on:click=move |_| close()>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Modal>
        }.into_any(),
        Some(ModalKind::Remove { name, current }) => view! {
            <Modal title="Remove Item from Inventory" on_close=move |_: ()| close()>
                <NoticeBanner notice=modal_notice on_dismiss=dismiss/>
                <form on:submit=on_form_submit>
                    <div class="form-group">
                        <label class="form-label">"Item"</label>
                        <input type="text" class="input" disabled=true prop:value=name/>
                    </div>
                    <div class="form-group">
                        <label class="form-label">{format!("Current Quantity: {}", current)}</label>
                    </div>
                    <div class="form-group">
                        <label class="form-label">"Quantity to Remove"</label>
                        <input
                            type="number"
                            class="input"
                            required=true
                            min="1"
                            max=current.to_string()
                            prop:value=quantity
                            on:input=move |ev| set_quantity(event_target_value(&ev))
                        />
                    </div>
                    <div class="button-group">
                        <button type="submit" class="button button-danger">"Remove"</button>
                        <button type="button" class="button button-secondary" on:click=move |_| close()>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Modal>
        }.into_any(),
    }
}
