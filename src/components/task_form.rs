//! Task Form Component
//!
//! Create/edit form. With `initial` set it edits that task and echoes its id
//! in the payload; otherwise it creates with the default status.

use leptos::prelude::*;

use crate::models::{Task, TaskPayload, DEFAULT_STATUS, STATUS_OPTIONS};
use crate::validate::validate_title;

#[component]
pub fn TaskForm(
    #[prop(into, optional)] initial: Option<Task>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_submit: Callback<TaskPayload>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = initial.is_some();
    let task_id = initial.as_ref().map(|task| task.id);

    let (title, set_title) = signal(
        initial.as_ref().map(|task| task.title.clone()).unwrap_or_default(),
    );
    let (description, set_description) = signal(
        initial.as_ref().map(|task| task.description.clone()).unwrap_or_default(),
    );
    let (status, set_status) = signal(
        initial
            .as_ref()
            .map(|task| task.status.clone())
            .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
    );
    let (title_error, set_title_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let error = validate_title(&title.get_untracked());
        let valid = error.is_none();
        set_title_error.set(error);
        if !valid {
            return;
        }
        on_submit.run(TaskPayload {
            id: task_id,
            title: title.get_untracked(),
            description: description.get_untracked(),
            status: status.get_untracked(),
        });
    };

    view! {
        <form class="task-form" on:submit=submit>
            <h3>{if editing { "Edit Task" } else { "Add Task" }}</h3>
            <div class="form-field">
                <label>"Title"</label>
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                {move || title_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
            </div>
            <div class="form-field">
                <label>"Description"</label>
                <input
                    type="text"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <label>"Status"</label>
                <select
                    prop:value=move || status.get()
                    on:change=move |ev| set_status.set(event_target_value(&ev))
                >
                    {STATUS_OPTIONS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="form-actions">
                <button type="submit" class="submit-btn" disabled=move || loading.get()>
                    {if editing { "Update" } else { "Create" }}
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    disabled=move || loading.get()
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
