//! Client-side DTOs for data supplied by surrounding providers.
//!
//! Post-creation wire types live in the shared `posts` crate; this module only
//! holds what the browser's auth provider hands us.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use posts::Category;

/// The signed-in forum user as reported by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub username: String,
    /// Account email, if the provider exposes it.
    #[serde(default)]
    pub email: Option<String>,
}
