//! Items Page
//!
//! Catalog table with current stock, plus the add/edit modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use medequip_client::views::{items, ItemCommand, ItemField, ItemRow, ItemsView};

use crate::components::{DeleteConfirmButton, Modal, NoticeBanner, QuantityBadge};
use crate::context::use_app_context;

#[component]
pub fn ItemsPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(ItemsView::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Load on mount and whenever the trigger is bumped
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        tracing::debug!(trigger, "loading items page");
        state.update(|s| s.load_started());
        let api = ctx.api();
        spawn_local(async move {
            let result = items::fetch(&api).await;
            state.update(|s| s.load_finished(result));
        });
    });

    // Every successful mutation refetches both lists
    let run_command = move |command: ItemCommand| {
        let api = ctx.api();
        spawn_local(async move {
            match items::execute(&api, &command).await {
                Ok(()) => {
                    state.update(|s| s.mutation_succeeded(&command));
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

    let first_load = Memo::new(move |_| state.with(|s| s.is_loading() && s.items().is_empty()));
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
                            <h2 class="card-title">"Medical Items"</h2>
                            <button
                                class="button button-primary"
                                on:click=move |_| state.update(|s| s.open_create())
                            >
                                "Add New Item"
                            </button>
                        </div>
                        <ItemsTable
                            rows=rows
                            state=state
                            on_command=move |command: ItemCommand| run_command(command)
                        />
                    </div>
                }.into_any()
            }}
            <ItemFormModal state=state on_submit=move |_: ()| submit_form()/>
        </div>
    }
}

#[component]
fn ItemsTable(
    rows: Memo<Vec<ItemRow>>,
    state: RwSignal<ItemsView>,
    #[prop(into)] on_command: Callback<ItemCommand>,
) -> impl IntoView {
    move || {
        let rows = rows.get();
        if rows.is_empty() {
            return view! { <p>"No items found. Add items to get started."</p> }.into_any();
        }

        view! {
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Cost"</th>
                        <th>"In Inventory"</th>
                        <th>"Description"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| {
                        let id = row.item.id;
                        let item = row.item.clone();
                        view! {
                            <tr>
                                <td>{row.item.name}</td>
                                <td>{row.item.item_type}</td>
                                <td>{row.cost}</td>
                                <td><QuantityBadge badge=row.badge quantity=row.quantity/></td>
                                <td>{row.description}</td>
                                <td>
                                    <div class="row-actions">
                                        <button
                                            class="button button-secondary button-small"
                                            on:click=move |_| state.update(|s| s.open_edit(&item))
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="button button-danger button-small"
                                            on_confirm=move |_: ()| on_command.run(ItemCommand::Delete { id })
                                        />
                                    </div>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        }.into_any()
    }
}

/// Add/edit modal; only rebuilt when it opens, closes or switches mode
#[component]
fn ItemFormModal(
    state: RwSignal<ItemsView>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let labels = Memo::new(move |_| state.with(|s| s.form().map(|f| (f.title(), f.submit_label()))));
    let form_notice = Memo::new(move |_| state.with(|s| s.form_notice().cloned()));
    let value = move |field: ItemField| {
        state.with(|s| s.form().map(|f| f.value(field).to_string()).unwrap_or_default())
    };
    let set = move |field: ItemField, v: String| state.update(|s| s.set_field(field, v));
    let close = move || state.update(|s| s.close_modal());

    move || {
        labels.get().map(|(title, submit_label)| {
            view! {
                <Modal title=title on_close=move |_: ()| close()>
                    <NoticeBanner notice=form_notice on_dismiss=move |_: ()| state.update(|s| s.dismiss_notice())/>
                    <form on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }>
                        <div class="form-group">
                            <label class="form-label">"Item Name"</label>
                            <input
                                type="text"
                                class="input"
                                required=true
                                prop:value=move || value(ItemField::Name)
                                on:input=move |ev| set(ItemField::Name, event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Item Type"</label>
                            <input
                                type="text"
                                class="input"
                                required=true
                                placeholder="e.g., MRI Machine, X-Ray Machine"
                                prop:value=move || value(ItemField::ItemType)
                                on:input=move |ev| set(ItemField::ItemType, event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Cost ($)"</label>
                            <input
                                type="number"
                                class="input"
                                required=true
                                min="0"
                                step="0.01"
                                prop:value=move || value(ItemField::Cost)
                                on:input=move |ev| set(ItemField::Cost, event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Description"</label>
                            <textarea
                                class="input"
                                rows="3"
                                prop:value=move || value(ItemField::Description)
                                on:input=move |ev| set(ItemField::Description, event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="button-group">
                            <button type="submit" class="button button-primary">{submit_label}</button>
                            <button type="button" class="button button-secondary" on:click=move |_| close()>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </Modal>
            }
        })
    }
}
