//! State-management core of a cryptocurrency wallet frontend.
//!
//! Implements unidirectional data flow over immutable state snapshots:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Selectors ──→ View
//!    ↑                                            │
//!    └────────────────────────────────────────────┘
//! ```
//!
//! Every field backed by a network call is stored as a [`remote::Remote`],
//! a four-variant lifecycle container. The side-effect layer issues requests
//! and dispatches loading/success/failure intents around them; reducers are
//! pure transitions over owned snapshots; derived views combine several
//! remote sources with the `lift` combinators instead of null-checking each
//! one at the call site.

pub mod buy_sell;
pub mod error;
pub mod flow;
pub mod profile;
pub mod recurring_buy;
pub mod remote;
pub mod root;
pub mod scenes;
