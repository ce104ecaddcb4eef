//! Task Manager App
//!
//! Root component: installs the session, router, and API contexts, renders
//! the nav bar, and dispatches routes with auth guards.

use leptos::ev;
use leptos::prelude::*;

use crate::api::Api;
use crate::components::NavLink;
use crate::pages::{LoginPage, ProfilePage, SignupPage, TasksPage};
use crate::router::{RequireAuth, Route, Router};
use crate::session::Session;

#[component]
pub fn App() -> impl IntoView {
    let session = Session::new();
    let router = Router::new();

    // Provide context to all children
    provide_context(session);
    provide_context(router);
    provide_context(Api::new(session, router));

    // Cross-tab login/logout resync, and back/forward navigation
    window_event_listener(ev::storage, move |_| session.sync());
    window_event_listener(ev::popstate, move |_| router.sync());

    view! {
        <div class="container">
            <h1>"Task Manager"</h1>
            <nav class="nav-bar">
                <ul>
                    <li><NavLink route=Route::Home label="Home"/></li>
                    <Show when=move || session.is_authenticated()>
                        <li><NavLink route=Route::Tasks label="Tasks"/></li>
                        <li><NavLink route=Route::Profile label="Profile"/></li>
                    </Show>
                    <Show when=move || !session.is_authenticated()>
                        <li><NavLink route=Route::Login label="Login"/></li>
                        <li><NavLink route=Route::Signup label="Signup"/></li>
                    </Show>
                </ul>
            </nav>

            {move || match router.current() {
                Route::Home => view! { <HomeRedirect/> }.into_any(),
                Route::Login => view! { <LoginPage/> }.into_any(),
                Route::Signup => view! { <SignupPage/> }.into_any(),
                Route::Tasks => view! {
                    <RequireAuth>
                        <TasksPage/>
                    </RequireAuth>
                }.into_any(),
                Route::Profile => view! {
                    <RequireAuth>
                        <ProfilePage/>
                    </RequireAuth>
                }.into_any(),
            }}
        </div>
    }
}

/// `/` goes to the task list when a session exists, else to login
#[component]
fn HomeRedirect() -> impl IntoView {
    let session = crate::session::use_session();
    let router = crate::router::use_router();

    Effect::new(move |_| {
        let target = if session.is_authenticated() {
            Route::Tasks
        } else {
            Route::Login
        };
        router.redirect(target);
    });
}
