//! Networking modules for the posts REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` provides the browser transport for the shared `posts` flow and
//! `types` holds provider-supplied DTOs.

pub mod api;
pub mod types;
