//! Tasks Page
//!
//! Task list orchestrator: owns the draft/applied filter pair, the fetch
//! effect keyed on page cursor, page size, and applied filters, and the
//! create/update/delete mutations with toast + re-fetch afterward.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::use_api;
use crate::components::{
    PageSizeSelect, Pagination, TaskFilters, TaskForm, TaskTable, Toast, ToastKind, ToastMessage,
    TOAST_DISMISS_MS,
};
use crate::models::{FilterState, Task, TaskPayload};
use crate::router::{use_router, Route};
use crate::session::use_session;
use crate::store::{
    store_apply_response, store_set_page, store_set_page_size, TasksState, TasksStateStoreFields,
    TasksStore,
};

#[component]
pub fn TasksPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let router = use_router();

    let store: TasksStore = Store::new(TasksState::new());
    let draft = RwSignal::new(FilterState::default());
    let applied = RwSignal::new(FilterState::default());

    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let (show_create, set_show_create) = signal(false);
    let (editing, set_editing) = signal::<Option<Task>>(None);
    let (create_loading, set_create_loading) = signal(false);
    let (edit_loading, set_edit_loading) = signal(false);
    let (delete_loading, set_delete_loading) = signal(false);

    // One transient notification; a newer one replaces it and restarts the
    // dismiss timer.
    let (toast, set_toast) = signal::<Option<ToastMessage>>(None);
    let toast_seq = StoredValue::new(0u32);
    let show_toast = move |kind: ToastKind, text: String| {
        let seq = toast_seq.with_value(|v| v + 1);
        toast_seq.set_value(seq);
        set_toast.set(Some(ToastMessage { kind, text }));
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            if toast_seq.with_value(|v| *v) == seq {
                set_toast.set(None);
            }
        });
    };

    // Fetch generation counter; a response from a superseded fetch (rapid
    // page or filter changes) is discarded instead of overwriting newer data.
    let fetch_seq = StoredValue::new(0u64);

    // Fetch on mount and whenever page_no, page_size, or the applied
    // filters change.
    Effect::new(move |_| {
        let page_no = store.page_no().get();
        let limit = store.page_size().get();
        let filters = applied.get();
        let seq = fetch_seq.with_value(|v| v + 1);
        fetch_seq.set_value(seq);
        set_loading.set(true);
        set_error.set(None);
        web_sys::console::log_1(
            &format!("[TASKS] Loading page {} (limit {})", page_no, limit).into(),
        );
        spawn_local(async move {
            let result = api.list_tasks(page_no, limit, &filters).await;
            if fetch_seq.with_value(|v| *v) != seq {
                return;
            }
            match result {
                Ok(response) => {
                    web_sys::console::log_1(
                        &format!("[TASKS] Loaded {} tasks", response.tasks.len()).into(),
                    );
                    store_apply_response(&store, response);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    // Re-run the fetch effect by reassigning the applied filters
    let refetch = move || applied.set(applied.get_untracked());

    let apply_filters = move |_| {
        applied.set(draft.get_untracked());
        store_set_page(&store, 1);
    };

    let reset_filters = move |_| {
        draft.set(FilterState::default());
        applied.set(FilterState::default());
        store_set_page(&store, 1);
    };

    let change_page = move |page: u32| store_set_page(&store, page);
    let change_page_size = move |size: u32| store_set_page_size(&store, size);

    // Only one of the create and edit forms may be open at a time; opening
    // the other is a no-op.
    let open_create = move |_| {
        if editing.get_untracked().is_some() {
            return;
        }
        set_show_create.set(true);
    };
    let open_edit = move |task: Task| {
        if show_create.get_untracked() {
            return;
        }
        set_editing.set(Some(task));
    };

    let create_task = move |payload: TaskPayload| {
        set_create_loading.set(true);
        spawn_local(async move {
            match api.create_task(&payload).await {
                Ok(()) => {
                    show_toast(ToastKind::Success, "Task created successfully".to_string());
                    set_show_create.set(false);
                    refetch();
                }
                Err(err) => show_toast(ToastKind::Error, err.to_string()),
            }
            set_create_loading.set(false);
        });
    };

    let update_task = move |payload: TaskPayload| {
        let Some(id) = payload.id else { return };
        set_edit_loading.set(true);
        spawn_local(async move {
            match api.update_task(id, &payload).await {
                Ok(()) => {
                    show_toast(ToastKind::Success, "Task updated successfully".to_string());
                    set_editing.set(None);
                    refetch();
                }
                Err(err) => show_toast(ToastKind::Error, err.to_string()),
            }
            set_edit_loading.set(false);
        });
    };

    let delete_task = move |id: u32| {
        if delete_loading.get_untracked() {
            return;
        }
        set_delete_loading.set(true);
        spawn_local(async move {
            match api.delete_task(id).await {
                Ok(()) => {
                    show_toast(ToastKind::Success, "Task deleted successfully".to_string());
                    refetch();
                }
                Err(err) => show_toast(ToastKind::Error, err.to_string()),
            }
            set_delete_loading.set(false);
        });
    };

    let logout = move |_| {
        session.clear();
        router.navigate(Route::Login);
    };

    let editing_id = Signal::derive(move || editing.get().map(|task| task.id));
    let mutation_in_flight = Signal::derive(move || edit_loading.get() || delete_loading.get());

    view! {
        <div class="tasks-page">
            <div class="tasks-header">
                <h2>"Tasks"</h2>
                <button class="logout-btn" on:click=logout>"Logout"</button>
            </div>

            <div class="tasks-toolbar">
                <button
                    class="add-task-btn"
                    disabled=move || {
                        show_create.get() || editing.get().is_some() || create_loading.get()
                    }
                    on:click=open_create
                >
                    "Add Task"
                </button>
            </div>

            <TaskFilters draft=draft on_apply=apply_filters on_reset=reset_filters/>

            <Show when=move || show_create.get() && editing.get().is_none()>
                <div class="form-panel">
                    <TaskForm
                        loading=create_loading
                        on_submit=create_task
                        on_cancel=move |_| set_show_create.set(false)
                    />
                </div>
            </Show>

            {move || {
                editing.get().filter(|_| !show_create.get()).map(|task| view! {
                    <div class="form-panel">
                        <TaskForm
                            initial=task
                            loading=edit_loading
                            on_submit=update_task
                            on_cancel=move |_| set_editing.set(None)
                        />
                    </div>
                })
            }}

            <div class="list-controls">
                <PageSizeSelect store=store on_change=change_page_size/>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-indicator">"Loading tasks..."</div> }
            >
                <Show
                    when=move || error.get().is_none()
                    fallback=move || view! {
                        <div class="error-message" role="alert">{move || error.get()}</div>
                    }
                >
                    <TaskTable
                        store=store
                        editing_id=editing_id
                        mutation_in_flight=mutation_in_flight
                        on_edit=open_edit
                        on_delete=delete_task
                    />
                </Show>
            </Show>

            <Pagination store=store on_page=change_page/>

            <Toast message=toast/>
        </div>
    }
}
