//! Wire vocabulary, child → parent.

use serde::{Deserialize, Serialize};

/// Current schema version. Receivers ignore envelopes carrying any other
/// version instead of guessing at their payload shape.
pub const PROTOCOL_VERSION: u32 = 1;

/// Messages sent from the embedded document to its hosting page.
///
/// Every message carries exactly one `type` and only the fields defined
/// for that type. Receivers must ignore unknown types, not error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BridgeMessage {
    /// A wallet session was established.
    #[serde(rename_all = "camelCase")]
    WalletConnected {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        wallet: Option<String>,
        public_key: String,
    },

    /// The wallet session ended.
    WalletDisconnected,

    /// A transfer was submitted and accepted by the network.
    TransactionSuccess { signature: String },

    /// The embedded document asks the host to switch its theme preset.
    Navigate { theme: String },
}

/// Versioned wrapper around a [`BridgeMessage`]. Senders always stamp
/// [`PROTOCOL_VERSION`]; a missing `version` on the wire is read as 1 so
/// pre-versioning senders still decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(flatten)]
    pub message: BridgeMessage,
}

fn default_version() -> u32 {
    1
}

impl Envelope {
    pub fn new(message: BridgeMessage) -> Self {
        Envelope {
            version: PROTOCOL_VERSION,
            message,
        }
    }
}

/// Decode one inbound message. Unknown `type` values, malformed
/// payloads, and unsupported versions all yield `None`; none of these is
/// an error on the receive path.
pub fn decode(value: serde_json::Value) -> Option<BridgeMessage> {
    let envelope: Envelope = serde_json::from_value(value).ok()?;
    (envelope.version == PROTOCOL_VERSION).then_some(envelope.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_the_documented_wire_shape() {
        let envelope = Envelope::new(BridgeMessage::WalletConnected {
            wallet: Some("Phantom".into()),
            public_key: "X".into(),
        });
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "type": "wallet-connected",
                "version": 1,
                "wallet": "Phantom",
                "publicKey": "X",
            })
        );
    }

    #[test]
    fn disconnected_carries_no_payload_fields() {
        let value = serde_json::to_value(Envelope::new(BridgeMessage::WalletDisconnected)).unwrap();
        assert_eq!(value, json!({ "type": "wallet-disconnected", "version": 1 }));
    }

    #[test]
    fn decodes_known_types() {
        let msg = decode(json!({
            "type": "transaction-success",
            "version": 1,
            "signature": "abc123",
        }));
        assert_eq!(
            msg,
            Some(BridgeMessage::TransactionSuccess {
                signature: "abc123".into()
            })
        );
    }

    #[test]
    fn missing_version_reads_as_one() {
        let msg = decode(json!({ "type": "navigate", "theme": "ton" }));
        assert_eq!(msg, Some(BridgeMessage::Navigate { theme: "ton".into() }));
    }

    #[test]
    fn unknown_type_is_ignored() {
        assert_eq!(decode(json!({ "type": "unknown-type", "foo": 1 })), None);
    }

    #[test]
    fn unsupported_version_is_ignored() {
        let msg = decode(json!({
            "type": "wallet-disconnected",
            "version": 2,
        }));
        assert_eq!(msg, None);
    }

    #[test]
    fn malformed_payload_is_ignored() {
        // signature missing
        assert_eq!(decode(json!({ "type": "transaction-success" })), None);
        // not an object at all
        assert_eq!(decode(json!("wallet-connected")), None);
    }

    #[test]
    fn connected_wallet_name_is_optional() {
        let msg = decode(json!({ "type": "wallet-connected", "publicKey": "X" }));
        assert_eq!(
            msg,
            Some(BridgeMessage::WalletConnected {
                wallet: None,
                public_key: "X".into()
            })
        );
    }
}
