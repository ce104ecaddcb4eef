//! Task Filters Component
//!
//! Edits the draft filter state. Nothing fetches until Apply submits the
//! draft; Reset returns both copies to the defaults (handled by the owner).

use leptos::prelude::*;

use crate::models::{FilterState, FILTER_STATUS_OPTIONS, SORT_FIELDS, SORT_ORDERS};

#[component]
pub fn TaskFilters(
    draft: RwSignal<FilterState>,
    #[prop(into)] on_apply: Callback<()>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_apply.run(());
    };

    view! {
        <form class="task-filters" on:submit=submit>
            <div class="filter-field">
                <label>"Title"</label>
                <input
                    type="text"
                    prop:value=move || draft.get().title
                    on:input=move |ev| draft.update(|f| f.title = event_target_value(&ev))
                />
            </div>
            <div class="filter-field">
                <label>"Description"</label>
                <input
                    type="text"
                    prop:value=move || draft.get().description
                    on:input=move |ev| draft.update(|f| f.description = event_target_value(&ev))
                />
            </div>
            <div class="filter-field">
                <label>"Status"</label>
                <select
                    prop:value=move || draft.get().status
                    on:change=move |ev| draft.update(|f| f.status = event_target_value(&ev))
                >
                    {FILTER_STATUS_OPTIONS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="filter-field">
                <label>"Sort By"</label>
                <select
                    prop:value=move || draft.get().sort_by
                    on:change=move |ev| draft.update(|f| f.sort_by = event_target_value(&ev))
                >
                    {SORT_FIELDS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="filter-field">
                <label>"Order"</label>
                <select
                    prop:value=move || draft.get().sort_order
                    on:change=move |ev| draft.update(|f| f.sort_order = event_target_value(&ev))
                >
                    {SORT_ORDERS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
            </div>
            <button type="submit" class="apply-btn">"Apply"</button>
            <button type="button" class="reset-btn" on:click=move |_| on_reset.run(())>
                "Reset"
            </button>
        </form>
    }
}
