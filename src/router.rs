//! Client-Side Router
//!
//! Route enum + a small History-API router handle provided via context, and
//! the `RequireAuth` guard that redirects unauthenticated renders to `/login`.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::session::use_session;

/// Application routes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Tasks,
    Profile,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Tasks => "/tasks",
            Route::Profile => "/profile",
        }
    }

    /// Parse a location pathname. Unknown paths land on Home, which itself
    /// redirects based on session presence.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/tasks" => Route::Tasks,
            "/profile" => Route::Profile,
            _ => Route::Home,
        }
    }

    /// Routes that require a stored session token
    pub fn requires_auth(self) -> bool {
        matches!(self, Route::Tasks | Route::Profile)
    }
}

/// Router handle provided via context
#[derive(Clone, Copy)]
pub struct Router {
    current: RwSignal<Route>,
    /// Route requested before a guard redirect, for "return to" behavior
    return_to: RwSignal<Option<Route>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(Route::from_path(&current_path())),
            return_to: RwSignal::new(None),
        }
    }

    /// Reactive current route
    pub fn current(&self) -> Route {
        self.current.get()
    }

    pub fn current_untracked(&self) -> Route {
        self.current.get_untracked()
    }

    /// Push a new history entry and switch views
    pub fn navigate(&self, route: Route) {
        set_history(route.path(), false);
        self.current.set(route);
    }

    /// Replace the current history entry (guard and 401 redirects)
    pub fn redirect(&self, route: Route) {
        set_history(route.path(), true);
        self.current.set(route);
    }

    /// Record the route a guard bounced away from
    pub fn remember(&self, route: Route) {
        self.return_to.set(Some(route));
    }

    pub fn return_to(&self) -> Option<Route> {
        self.return_to.get_untracked()
    }

    /// Resync from the address bar. Wired to the window `popstate` event.
    pub fn sync(&self) {
        self.current.set(Route::from_path(&current_path()));
    }
}

/// Get the router from context
pub fn use_router() -> Router {
    expect_context::<Router>()
}

/// Guard wrapper for protected views. While no token is stored the children
/// render nothing and an effect redirects to the login view, keeping the
/// originally requested route available via `Router::return_to`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    Effect::new(move |_| {
        if !session.is_authenticated() {
            router.remember(router.current_untracked());
            router.redirect(Route::Login);
        }
    });

    view! {
        <Show when=move || session.is_authenticated()>
            {children()}
        </Show>
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn set_history(path: &str, replace: bool) {
    let Some(window) = web_sys::window() else { return };
    let Ok(history) = window.history() else { return };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    };
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_parse_to_their_routes() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/signup"), Route::Signup);
        assert_eq!(Route::from_path("/tasks"), Route::Tasks);
        assert_eq!(Route::from_path("/profile"), Route::Profile);
    }

    #[test]
    fn trailing_slash_and_unknown_paths() {
        assert_eq!(Route::from_path("/tasks/"), Route::Tasks);
        assert_eq!(Route::from_path("/nope"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn path_round_trips() {
        for route in [Route::Home, Route::Login, Route::Signup, Route::Tasks, Route::Profile] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn only_tasks_and_profile_are_guarded() {
        assert!(Route::Tasks.requires_auth());
        assert!(Route::Profile.requires_auth());
        assert!(!Route::Home.requires_auth());
        assert!(!Route::Login.requires_auth());
        assert!(!Route::Signup.requires_auth());
    }
}
