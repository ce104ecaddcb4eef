//! Profile Page
//!
//! Guarded placeholder.

use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="profile-page">
            <h2>"User Profile"</h2>
        </div>
    }
}
