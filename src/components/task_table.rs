//! Task Table Component
//!
//! Renders the current page of tasks with per-row edit/delete actions.
//! Actions on the row being edited, or while a mutation is in flight, are
//! disabled.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::{status_label, Task};
use crate::store::{TasksStateStoreFields, TasksStore};

#[component]
pub fn TaskTable(
    store: TasksStore,
    editing_id: Signal<Option<u32>>,
    mutation_in_flight: Signal<bool>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    view! {
        <table class="task-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Description"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.tasks().get()
                    key=|task| (task.id, task.title.clone(), task.description.clone(), task.status.clone())
                    children=move |task| {
                        let row_id = task.id;
                        let row_disabled = move || {
                            mutation_in_flight.get() || editing_id.get() == Some(row_id)
                        };
                        let edit_task = task.clone();

                        view! {
                            <tr class="task-row">
                                <td class="task-title">{task.title.clone()}</td>
                                <td class="task-description">{task.description.clone()}</td>
                                <td class="task-status">{status_label(&task.status).to_string()}</td>
                                <td class="task-actions">
                                    <button
                                        class="edit-btn"
                                        disabled=row_disabled
                                        on:click=move |_| on_edit.run(edit_task.clone())
                                    >
                                        "Edit"
                                    </button>
                                    <DeleteConfirmButton
                                        button_class="delete-btn"
                                        disabled=Signal::derive(row_disabled)
                                        on_confirm=move |_| on_delete.run(row_id)
                                    />
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
