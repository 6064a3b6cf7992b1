//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only state shared across the whole tree; it is built
//! once at the root and provided through context.

pub mod session;
