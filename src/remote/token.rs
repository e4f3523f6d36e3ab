//! Request identity for guarding against stale responses.

use uuid::Uuid;

/// Identity of one issued request.
///
/// The side-effect layer issues a token when it starts a request and attaches
/// it to the loading and terminal intents of that request. A reducer that
/// records the token at `Loading` can then drop terminal intents answering
/// an older request, instead of letting a slow response overwrite a newer
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(Uuid);

impl RequestToken {
    /// Issue a fresh token.
    pub fn issue() -> Self {
        Self(Uuid::new_v4())
    }
}
