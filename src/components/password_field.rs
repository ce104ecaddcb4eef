//! Password Field Component
//!
//! Labeled password input with a visibility toggle and an inline field error.

use leptos::prelude::*;

#[component]
pub fn PasswordField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    error: ReadSignal<Option<String>>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);
    let input_id = id.clone();

    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <div class="password-input">
                <input
                    id=input_id
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="password-toggle"
                    tabindex=-1
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
            {move || error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
        </div>
    }
}
