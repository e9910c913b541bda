//! Edge-triggered connection notifications.
//!
//! The embedded document re-evaluates its wallet state on every provider
//! event; the notifier collapses those re-evaluations into one message
//! per actual transition so the host is never spammed with redundant
//! re-sends of its current state.

use crate::message::BridgeMessage;

/// What the embedded document knows about its wallet right now. The rest
/// of the wallet adapter is opaque; this triple is the entire contract.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletSnapshot {
    pub connected: bool,
    pub public_key: Option<String>,
    pub wallet_name: Option<String>,
}

impl WalletSnapshot {
    /// The identity of an established session, if there is one. A
    /// "connected" flag without a public key does not count as a session.
    fn session_identity(&self) -> Option<(String, Option<String>)> {
        if !self.connected {
            return None;
        }
        self.public_key
            .clone()
            .map(|pk| (pk, self.wallet_name.clone()))
    }
}

/// Tracks the last reported session identity and emits a message only
/// when it changes. The first observation always reports, so a mount
/// while disconnected announces `wallet-disconnected` to the host.
#[derive(Debug, Default)]
pub struct ConnectionNotifier {
    last_reported: Option<Option<(String, Option<String>)>>,
}

impl ConnectionNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, snapshot: &WalletSnapshot) -> Option<BridgeMessage> {
        let current = snapshot.session_identity();
        if self.last_reported.as_ref() == Some(&current) {
            return None;
        }
        self.last_reported = Some(current.clone());
        Some(match current {
            Some((public_key, wallet)) => BridgeMessage::WalletConnected { wallet, public_key },
            None => BridgeMessage::WalletDisconnected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(pk: &str, wallet: &str) -> WalletSnapshot {
        WalletSnapshot {
            connected: true,
            public_key: Some(pk.into()),
            wallet_name: Some(wallet.into()),
        }
    }

    #[test]
    fn reports_initial_disconnected_mount() {
        let mut notifier = ConnectionNotifier::new();
        assert_eq!(
            notifier.observe(&WalletSnapshot::default()),
            Some(BridgeMessage::WalletDisconnected)
        );
    }

    #[test]
    fn full_connect_disconnect_cycle_in_order() {
        let mut notifier = ConnectionNotifier::new();
        let mut sent = Vec::new();
        for snapshot in [
            WalletSnapshot::default(),
            connected("X", "Phantom"),
            WalletSnapshot::default(),
        ] {
            sent.extend(notifier.observe(&snapshot));
        }
        assert_eq!(
            sent,
            vec![
                BridgeMessage::WalletDisconnected,
                BridgeMessage::WalletConnected {
                    wallet: Some("Phantom".into()),
                    public_key: "X".into()
                },
                BridgeMessage::WalletDisconnected,
            ]
        );
    }

    #[test]
    fn re_observing_the_same_state_is_silent() {
        let mut notifier = ConnectionNotifier::new();
        let snapshot = connected("X", "Phantom");
        assert!(notifier.observe(&snapshot).is_some());
        assert_eq!(notifier.observe(&snapshot), None);
        assert_eq!(notifier.observe(&snapshot), None);
    }

    #[test]
    fn switching_accounts_reports_again() {
        let mut notifier = ConnectionNotifier::new();
        notifier.observe(&connected("X", "Phantom"));
        let msg = notifier.observe(&connected("Y", "Phantom"));
        assert_eq!(
            msg,
            Some(BridgeMessage::WalletConnected {
                wallet: Some("Phantom".into()),
                public_key: "Y".into()
            })
        );
    }

    #[test]
    fn connected_without_public_key_counts_as_disconnected() {
        let mut notifier = ConnectionNotifier::new();
        let snapshot = WalletSnapshot {
            connected: true,
            public_key: None,
            wallet_name: Some("Phantom".into()),
        };
        assert_eq!(
            notifier.observe(&snapshot),
            Some(BridgeMessage::WalletDisconnected)
        );
    }
}
