//! Unidirectional data flow primitives.
//!
//! This module provides the base traits for the state layer and the store
//! that owns the state tree.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Selectors
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of a slice (or the whole tree)
//! - **Intent**: User actions or system events, including the network
//!   lifecycle events the side-effect layer dispatches around requests
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Owns the current snapshot and is its only writer

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
pub use store::Store;
