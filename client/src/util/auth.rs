//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that need a signed-in user apply the same guard: wait for the auth
//! provider, then either render their content or a login prompt.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

/// Login route linked from the prompt.
pub const LOGIN_PATH: &str = "/login";

/// What an auth-guarded page should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthGate {
    /// The provider has not resolved the session yet.
    Loading,
    /// No session; show only the login prompt.
    LoginPrompt,
    /// A session exists; render the page.
    Ready,
}

pub fn auth_gate(state: &AuthState) -> AuthGate {
    if state.session().is_some() {
        AuthGate::Ready
    } else if state.loading {
        AuthGate::Loading
    } else {
        AuthGate::LoginPrompt
    }
}
