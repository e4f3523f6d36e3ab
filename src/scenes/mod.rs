//! Derived views.
//!
//! Ephemeral values computed from one or more state slices on every read,
//! never stored. Each scene combines the remote sources a screen needs into
//! a single value the renderer can branch on once.

pub mod order_summary;
pub mod sofi_verify;
