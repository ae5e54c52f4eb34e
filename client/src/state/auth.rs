//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled by the host application's auth provider and read through context by
//! identity-dependent pages. This crate never writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user, token and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// Bearer credential for backend calls.
    pub token: Option<String>,
    pub loading: bool,
}

/// A usable authenticated session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session<'a> {
    pub user: &'a User,
    pub token: &'a str,
}

impl AuthState {
    /// The current session, present only when both a user and a non-empty
    /// token are known.
    pub fn session(&self) -> Option<Session<'_>> {
        let user = self.user.as_ref()?;
        let token = self.token.as_deref().filter(|t| !t.is_empty())?;
        Some(Session { user, token })
    }
}
