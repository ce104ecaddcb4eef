//! Page Size Select Component

use leptos::prelude::*;

use crate::models::PAGE_SIZES;
use crate::store::{TasksStateStoreFields, TasksStore};

/// Selector over the canonical page sizes; changing it restarts pagination
/// from the first page (handled by the owner via `on_change`).
#[component]
pub fn PageSizeSelect(store: TasksStore, #[prop(into)] on_change: Callback<u32>) -> impl IntoView {
    view! {
        <div class="page-size">
            <label for="page-size">"Page Size:"</label>
            <select
                id="page-size"
                prop:value=move || store.page_size().get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_change.run(size);
                    }
                }
            >
                {PAGE_SIZES.iter().map(|size| view! {
                    <option value=size.to_string()>{*size}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
