//! Owned state container with a single update entry point.

use std::mem;

use super::reducer::Reducer;

/// Holds the current state snapshot and applies intents through the reducer.
///
/// The store is the sole writer of its state; reads go through [`Store::state`]
/// or [`Store::select`]. Dispatch is synchronous: the next snapshot exists
/// before the call returns, so no half-applied state is observable anywhere.
pub struct Store<R: Reducer> {
    state: R::State,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding the initial state.
    pub fn new() -> Self {
        Self {
            state: R::State::default(),
        }
    }

    /// Create a store from a pre-built snapshot.
    pub fn with_state(state: R::State) -> Self {
        Self { state }
    }

    /// Apply one intent and replace the snapshot with the reducer's output.
    pub fn dispatch(&mut self, intent: R::Intent) {
        tracing::debug!(?intent, "dispatch");
        let state = mem::take(&mut self.state);
        self.state = R::reduce(state, intent);
    }

    /// The current state snapshot.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Run a selector against the current snapshot.
    pub fn select<T>(&self, selector: impl FnOnce(&R::State) -> T) -> T {
        selector(&self.state)
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
