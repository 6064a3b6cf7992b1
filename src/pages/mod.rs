//! Routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages read the session from context; none of them own auth state.

pub mod dashboard;
pub mod login;
