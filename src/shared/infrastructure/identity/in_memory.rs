use crate::shared::infrastructure::identity::{Identity, IdentityProvider, IdentityState};
use tokio::sync::watch;

pub struct InMemoryIdentityProvider {
    state: watch::Sender<IdentityState>,
}

impl Default for InMemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryIdentityProvider {
    /// Starts signed out.
    pub fn new() -> Self {
        Self::with_state(IdentityState::SignedOut)
    }

    /// Starts before the session is known, like a provider that has not yet
    /// restored its persisted login.
    pub fn resolving() -> Self {
        Self::with_state(IdentityState::Resolving)
    }

    pub fn signed_in(uid: impl Into<String>) -> Self {
        Self::with_state(IdentityState::SignedIn(Identity::new(uid)))
    }

    fn with_state(state: IdentityState) -> Self {
        let (sender, _) = watch::channel(state);
        Self { state: sender }
    }

    pub fn sign_in(&self, uid: impl Into<String>) {
        let identity = Identity::new(uid);
        tracing::info!(uid = %identity.uid, "identity signed in");
        self.state.send_replace(IdentityState::SignedIn(identity));
    }

    pub fn sign_out(&self) {
        tracing::info!("identity signed out");
        self.state.send_replace(IdentityState::SignedOut);
    }
}

impl IdentityProvider for InMemoryIdentityProvider {
    fn current(&self) -> Option<Identity> {
        self.state.borrow().identity().cloned()
    }

    fn subscribe(&self) -> watch::Receiver<IdentityState> {
        self.state.subscribe()
    }
}
