//! Login Page
//!
//! Username/password form. A 200 with a token stores it and navigates to the
//! task list; 401 shows "Invalid credentials" without touching the stored
//! token; anything else is a generic network error.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, ApiError};
use crate::components::NavLink;
use crate::models::LoginPayload;
use crate::router::{use_router, Route};
use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_success.set(false);
        let payload = LoginPayload {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        spawn_local(async move {
            match api.login(&payload).await {
                Ok(token) => {
                    session.set(&token);
                    set_success.set(true);
                    router.navigate(Route::Tasks);
                }
                Err(ApiError::Unauthorized) => {
                    set_error.set(Some("Invalid credentials".to_string()));
                }
                Err(_) => set_error.set(Some("Network error".to_string())),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Login"</h2>
                {move || error.get().map(|msg| view! {
                    <div class="form-error">{msg}</div>
                })}
                <Show when=move || success.get()>
                    <div class="form-success">"Login successful"</div>
                </Show>
                <form on:submit=submit>
                    <div class="form-field">
                        <label for="login-username">"Username"</label>
                        <input
                            id="login-username"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label for="login-password">"Password"</label>
                        <input
                            id="login-password"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="submit-btn">"Log In"</button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <NavLink route=Route::Signup label="Sign up"/>
                </p>
            </div>
        </div>
    }
}
