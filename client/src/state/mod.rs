//! Client-side state modules.
//!
//! ARCHITECTURE
//! ============
//! `auth` and `categories` are filled by surrounding providers and read via
//! context; `post_form` is owned by the create-post page.

pub mod auth;
pub mod categories;
pub mod post_form;
