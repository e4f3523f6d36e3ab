//! Reducer trait for the state layer.

use super::intent::Intent;
use super::state::StoreState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects. Every intent
    /// maps to exactly one next state; intents that do not concern the
    /// current state return it unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
