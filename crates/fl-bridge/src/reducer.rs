//! Host-side message handling.

use crate::message::BridgeMessage;

/// The host's view of the embedded document's wallet session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletSession {
    pub connected: bool,
    pub public_key: Option<String>,
    pub wallet: Option<String>,
}

/// Observable state the host derives from inbound messages. Messages
/// that fail to decode never reach `apply`, so anything the host does
/// not recognize leaves this state untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostState {
    pub wallet: Option<WalletSession>,
    pub last_signature: Option<String>,
    pub requested_theme: Option<String>,
}

impl HostState {
    pub fn apply(&mut self, message: BridgeMessage) {
        match message {
            BridgeMessage::WalletConnected { wallet, public_key } => {
                self.wallet = Some(WalletSession {
                    connected: true,
                    public_key: Some(public_key),
                    wallet,
                });
            }
            BridgeMessage::WalletDisconnected => {
                self.wallet = Some(WalletSession::default());
            }
            BridgeMessage::TransactionSuccess { signature } => {
                self.last_signature = Some(signature);
            }
            BridgeMessage::Navigate { theme } => {
                self.requested_theme = Some(theme);
            }
        }
    }

    /// Revert the transaction display after its timed window elapses.
    pub fn clear_last_signature(&mut self) {
        self.last_signature = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::decode;
    use serde_json::json;

    #[test]
    fn connected_then_disconnected_updates_the_session() {
        let mut state = HostState::default();
        state.apply(BridgeMessage::WalletConnected {
            wallet: Some("Phantom".into()),
            public_key: "X".into(),
        });
        assert_eq!(
            state.wallet,
            Some(WalletSession {
                connected: true,
                public_key: Some("X".into()),
                wallet: Some("Phantom".into()),
            })
        );

        state.apply(BridgeMessage::WalletDisconnected);
        assert_eq!(state.wallet, Some(WalletSession::default()));
    }

    #[test]
    fn unknown_messages_leave_state_unchanged() {
        let mut state = HostState::default();
        state.apply(BridgeMessage::TransactionSuccess {
            signature: "abc123".into(),
        });
        let before = state.clone();

        // the decode step drops it, so nothing reaches apply
        assert_eq!(decode(json!({ "type": "unknown-type", "foo": 1 })), None);
        assert_eq!(state, before);
    }

    #[test]
    fn transaction_success_sets_and_clear_reverts() {
        let mut state = HostState::default();
        state.apply(BridgeMessage::TransactionSuccess {
            signature: "abc123".into(),
        });
        assert_eq!(state.last_signature.as_deref(), Some("abc123"));

        state.clear_last_signature();
        assert_eq!(state.last_signature, None);
    }

    #[test]
    fn a_second_success_supersedes_the_first() {
        let mut state = HostState::default();
        state.apply(BridgeMessage::TransactionSuccess {
            signature: "first".into(),
        });
        state.apply(BridgeMessage::TransactionSuccess {
            signature: "second".into(),
        });
        assert_eq!(state.last_signature.as_deref(), Some("second"));
    }

    #[test]
    fn multibyte_signature_survives_the_full_inbound_path() {
        // decode accepts any JSON string as a signature, so the display
        // path downstream must tolerate non-ASCII content
        let message = decode(json!({
            "type": "transaction-success",
            "signature": "ありがとうございました",
        }))
        .unwrap();

        let mut state = HostState::default();
        state.apply(message);
        let signature = state.last_signature.unwrap();
        assert_eq!(
            crate::display::abbreviate(&signature, 4),
            "ありがと...いました"
        );
    }

    #[test]
    fn navigate_records_the_requested_theme() {
        let mut state = HostState::default();
        state.apply(BridgeMessage::Navigate { theme: "ton".into() });
        assert_eq!(state.requested_theme.as_deref(), Some("ton"));
    }
}
