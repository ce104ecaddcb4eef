//! Session Token Store
//!
//! Wraps the `access_token` localStorage key. The token is opaque: no expiry
//! parsing, no structure checks. An `RwSignal<bool>` mirrors token presence so
//! the nav bar and route guards react to login/logout without re-reading
//! storage themselves.

use leptos::prelude::*;

/// localStorage key holding the raw bearer token
pub const TOKEN_KEY: &str = "access_token";

/// Session handle provided via context
#[derive(Clone, Copy)]
pub struct Session {
    authed: RwSignal<bool>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            authed: RwSignal::new(read_token().is_some()),
        }
    }

    /// Reactive presence check
    pub fn is_authenticated(&self) -> bool {
        self.authed.get()
    }

    /// Current token, read straight from storage
    pub fn token(&self) -> Option<String> {
        read_token()
    }

    /// Store a token after a successful login
    pub fn set(&self, token: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
        self.authed.set(true);
    }

    /// Drop the token (logout, or a 401 from the backend)
    pub fn clear(&self) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
        self.authed.set(false);
    }

    /// Resync the authed flag from storage. Wired to the window `storage`
    /// event so a login/logout in another tab is picked up here.
    pub fn sync(&self) {
        self.authed.set(read_token().is_some());
    }
}

/// Get the session from context
pub fn use_session() -> Session {
    expect_context::<Session>()
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_token() -> Option<String> {
    storage()?.get_item(TOKEN_KEY).ok().flatten()
}
