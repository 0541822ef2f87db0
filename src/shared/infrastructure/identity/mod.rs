// Identity provider port.
//
// Purpose
// - Tell the core whose data is being read and written.
//
// Responsibilities
// - Expose the current identity synchronously.
// - Publish identity changes through a watch channel. A freshly started provider
//   may still be resolving the session; subscribers wait for a settled state.

pub mod in_memory;

use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: String,
}

impl Identity {
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityState {
    Resolving,
    SignedOut,
    SignedIn(Identity),
}

impl IdentityState {
    pub fn is_resolving(&self) -> bool {
        matches!(self, IdentityState::Resolving)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            IdentityState::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }
}

pub trait IdentityProvider: Send + Sync {
    fn current(&self) -> Option<Identity>;

    fn subscribe(&self) -> watch::Receiver<IdentityState>;
}
