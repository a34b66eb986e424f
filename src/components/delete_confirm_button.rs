//! Delete Confirm Button Component

use leptos::prelude::*;

/// Two-step delete for a table row.
///
/// The first click only arms the button; the row is deleted after "Yes".
/// Clicks never reach the row underneath.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let button_class = StoredValue::new(button_class);

    let set_armed = move |ev: web_sys::MouseEvent, value: bool| {
        ev.stop_propagation();
        armed.set(value);
    };

    move || {
        if !armed.get() {
            return view! {
                <button
                    class=button_class.get_value()
                    on:click=move |ev| set_armed(ev, true)
                >
                    "Delete"
                </button>
            }
            .into_any();
        }

        view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete this item?"</span>
                <button
                    class="button button-danger button-small"
                    on:click=move |ev| {
                        set_armed(ev, false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="button button-secondary button-small"
                    on:click=move |ev| set_armed(ev, false)
                >
                    "No"
                </button>
            </span>
        }
        .into_any()
    }
}
