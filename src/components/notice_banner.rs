//! Notice Banner Component
//!
//! Dismissible message above a page: server detail, generic failure, or
//! rejected form input.

use leptos::prelude::*;
use medequip_client::views::{Notice, NoticeKind};

#[component]
pub fn NoticeBanner(
    notice: Memo<Option<Notice>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Load | NoticeKind::Error => "notice notice-error",
                NoticeKind::Validation => "notice notice-warning",
            };
            view! {
                <div class=class role="alert">
                    <span class="notice-text">{notice.text}</span>
                    <button class="close-button" on:click=move |_| on_dismiss.run(())>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
