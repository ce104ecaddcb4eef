//! Signup Page
//!
//! Registration form with client-side validation. Field errors block the
//! network call entirely; a 2xx shows the success indicator and resets the
//! fields.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::{NavLink, PasswordField};
use crate::models::RegisterPayload;
use crate::router::Route;
use crate::validate::validate_signup;

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = use_api();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());

    let (username_error, set_username_error) = signal::<Option<String>>(None);
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (password_error, set_password_error) = signal::<Option<String>>(None);
    let (confirm_error, set_confirm_error) = signal::<Option<String>>(None);

    let (api_error, set_api_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_api_error.set(None);

        let errors = validate_signup(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        );
        let valid = errors.is_ok();
        set_username_error.set(errors.username);
        set_email_error.set(errors.email);
        set_password_error.set(errors.password);
        set_confirm_error.set(errors.confirm_password);
        if !valid {
            return;
        }

        let payload = RegisterPayload {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        spawn_local(async move {
            match api.register(&payload).await {
                Ok(()) => {
                    set_success.set(true);
                    set_username.set(String::new());
                    set_email.set(String::new());
                    set_password.set(String::new());
                    set_confirm.set(String::new());
                }
                Err(err) => set_api_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Signup"</h2>
                <Show when=move || success.get()>
                    <div class="form-success">"Signup successful"</div>
                </Show>
                <form on:submit=submit>
                    <div class="form-field">
                        <label for="signup-username">"Username"</label>
                        <input
                            id="signup-username"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                        {move || username_error.get().map(|msg| view! {
                            <div class="field-error">{msg}</div>
                        })}
                    </div>
                    <div class="form-field">
                        <label for="signup-email">"Email"</label>
                        <input
                            id="signup-email"
                            type="email"
                            placeholder="Email Address"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        {move || email_error.get().map(|msg| view! {
                            <div class="field-error">{msg}</div>
                        })}
                    </div>
                    <PasswordField
                        id="signup-password"
                        label="Password"
                        placeholder="Password"
                        value=password
                        set_value=set_password
                        error=password_error
                    />
                    <PasswordField
                        id="signup-confirm-password"
                        label="Confirm Password"
                        placeholder="Confirm Password"
                        value=confirm
                        set_value=set_confirm
                        error=confirm_error
                    />
                    {move || api_error.get().map(|msg| view! {
                        <div class="form-error">{msg}</div>
                    })}
                    <button type="submit" class="submit-btn">"Sign Up"</button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <NavLink route=Route::Login label="Log in"/>
                </p>
            </div>
        </div>
    }
}
