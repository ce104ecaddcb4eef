//! Pagination Controls Component
//!
//! Prev/next buttons gated by the server-reported flags, plus a page readout.

use leptos::prelude::*;

use crate::store::{TasksStateStoreFields, TasksStore};

#[component]
pub fn Pagination(store: TasksStore, #[prop(into)] on_page: Callback<u32>) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="page-btn"
                disabled=move || !store.has_prev().get()
                on:click=move |_| on_page.run(store.page_no().get_untracked() - 1)
            >
                "Prev"
            </button>
            <span class="page-info">
                {move || format!("Page {} of {}", store.page_no().get(), store.total_pages().get())}
            </span>
            <button
                class="page-btn"
                disabled=move || !store.has_next().get()
                on:click=move |_| on_page.run(store.page_no().get_untracked() + 1)
            >
                "Next"
            </button>
        </div>
    }
}
