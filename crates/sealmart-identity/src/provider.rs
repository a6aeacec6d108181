use tokio::sync::watch;

use sealmart_types::Identity;

/// Source of the caller's signing identity.
///
/// `current` answers synchronously from the last known state; `subscribe`
/// hands out a watch receiver that observes connects, disconnects, and
/// account switches. `None` means no wallet is connected — operations that
/// need a signer fail fast on it without touching the store.
pub trait SigningIdentityProvider: Send + Sync {
    /// The identity that would sign right now, if any.
    fn current(&self) -> Option<Identity>;

    /// Subscribe to identity changes. The receiver yields the new value
    /// (or `None` on disconnect) each time the identity changes.
    fn subscribe(&self) -> watch::Receiver<Option<Identity>>;
}

/// Identity provider backed by a watch channel.
///
/// Holds one explicitly-set identity. Used in tests and the demo binary,
/// and as the adapter target for wallet transports that push account
/// events into it.
pub struct StaticIdentityProvider {
    tx: watch::Sender<Option<Identity>>,
}

impl StaticIdentityProvider {
    /// Start disconnected.
    pub fn disconnected() -> Self {
        Self {
            tx: watch::channel(None).0,
        }
    }

    /// Start connected as `identity`.
    pub fn connected(identity: Identity) -> Self {
        Self {
            tx: watch::channel(Some(identity)).0,
        }
    }

    /// Connect or switch to `identity`, notifying subscribers.
    pub fn set_identity(&self, identity: Identity) {
        self.tx.send_replace(Some(identity));
    }

    /// Disconnect, notifying subscribers.
    pub fn clear(&self) {
        self.tx.send_replace(None);
    }
}

impl SigningIdentityProvider for StaticIdentityProvider {
    fn current(&self) -> Option<Identity> {
        self.tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Test 1: Disconnected provider has no identity ----
    #[test]
    fn disconnected_has_no_identity() {
        let provider = StaticIdentityProvider::disconnected();
        assert!(provider.current().is_none());
    }

    // ---- Test 2: Connected provider reports its identity ----
    #[test]
    fn connected_reports_identity() {
        let provider = StaticIdentityProvider::connected(Identity::new("0xAAA"));
        assert_eq!(provider.current(), Some(Identity::new("0xAAA")));
    }

    // ---- Test 3: Subscribers observe switches and disconnects ----
    #[tokio::test]
    async fn subscriber_observes_changes() {
        let provider = StaticIdentityProvider::disconnected();
        let mut rx = provider.subscribe();

        provider.set_identity(Identity::new("0xAAA"));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Some(Identity::new("0xAAA")));

        provider.clear();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }
}
