//! Nav Link Component

use leptos::prelude::*;

use crate::router::{use_router, Route};

/// Anchor that routes client-side instead of reloading the page
#[component]
pub fn NavLink(route: Route, #[prop(into)] label: String) -> impl IntoView {
    let router = use_router();

    view! {
        <a
            href=route.path()
            class="nav-link"
            on:click=move |ev| {
                ev.prevent_default();
                router.navigate(route);
            }
        >
            {label}
        </a>
    }
}
