//! Lifecycle container for asynchronous data.
//!
//! Every state field backed by a network call is a [`Remote`] rather than a
//! `loading`/`error`/`data` flag triple, so invalid combinations (loading
//! with data present, error alongside a value) are unrepresentable. The
//! side-effect layer moves a field `NotAsked → Loading → Success`/`Failure`
//! by dispatching intents around each request; views read the field back
//! with [`Remote::cata`], [`Remote::map`] and [`Remote::get_or_else`], and
//! combine several fields with the [`lift2`]..[`lift5`] combinators.

mod lift;
mod token;

pub use lift::{lift2, lift3, lift4, lift5};
pub use token::RequestToken;

/// Lifecycle of one asynchronous fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<E, V> {
    /// No request has been initiated.
    NotAsked,

    /// A request is in flight; carries no payload.
    Loading,

    /// The request completed with an error.
    Failure(E),

    /// The request completed with a value.
    Success(V),
}

// Manual impl: the derive would demand `E: Default + V: Default` even
// though `NotAsked` needs neither.
impl<E, V> Default for Remote<E, V> {
    fn default() -> Self {
        Remote::NotAsked
    }
}

impl<E, V> Remote<E, V> {
    /// Apply `f` to the payload of a `Success`; pass any other variant
    /// through unchanged.
    pub fn map<T>(self, f: impl FnOnce(V) -> T) -> Remote<E, T> {
        match self {
            Remote::NotAsked => Remote::NotAsked,
            Remote::Loading => Remote::Loading,
            Remote::Failure(e) => Remote::Failure(e),
            Remote::Success(v) => Remote::Success(f(v)),
        }
    }

    /// Apply `f` to the error of a `Failure`; pass any other variant
    /// through unchanged.
    pub fn map_failure<T>(self, f: impl FnOnce(E) -> T) -> Remote<T, V> {
        match self {
            Remote::NotAsked => Remote::NotAsked,
            Remote::Loading => Remote::Loading,
            Remote::Failure(e) => Remote::Failure(f(e)),
            Remote::Success(v) => Remote::Success(v),
        }
    }

    /// The payload of a `Success`, or the supplied default. Total.
    pub fn get_or_else(&self, default: V) -> V
    where
        V: Clone,
    {
        match self {
            Remote::Success(v) => v.clone(),
            _ => default,
        }
    }

    /// Exhaustive dispatch over the four variants.
    pub fn cata<T>(
        &self,
        on_not_asked: impl FnOnce() -> T,
        on_loading: impl FnOnce() -> T,
        on_failure: impl FnOnce(&E) -> T,
        on_success: impl FnOnce(&V) -> T,
    ) -> T {
        match self {
            Remote::NotAsked => on_not_asked(),
            Remote::Loading => on_loading(),
            Remote::Failure(e) => on_failure(e),
            Remote::Success(v) => on_success(v),
        }
    }

    /// Borrowing view, `Option::as_ref` style.
    pub fn as_ref(&self) -> Remote<&E, &V> {
        match self {
            Remote::NotAsked => Remote::NotAsked,
            Remote::Loading => Remote::Loading,
            Remote::Failure(e) => Remote::Failure(e),
            Remote::Success(v) => Remote::Success(v),
        }
    }

    /// The success payload, if any.
    pub fn success(&self) -> Option<&V> {
        match self {
            Remote::Success(v) => Some(v),
            _ => None,
        }
    }

    /// The failure payload, if any.
    pub fn failure(&self) -> Option<&E> {
        match self {
            Remote::Failure(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_not_asked(&self) -> bool {
        matches!(self, Remote::NotAsked)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Remote::Failure(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Remote::Success(_))
    }
}
