//! Networking modules for the authentication REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the auth service seam and its HTTP implementation, and
//! `types` defines the wire schema and the persisted session record.

pub mod api;
pub mod types;
