//! Durable session continuity for one embedded document instance.
//!
//! A single versioned record under a single key replaces juggling
//! independent flag and key entries, so a partial write can never leave
//! the flag and the public key disagreeing.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

/// The one storage key this schema version uses.
pub const SESSION_KEY: &str = "framelink.session.v1";

/// Minimal session continuity persisted across reloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub connected: bool,
    pub public_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_name: Option<String>,
}

/// Storage access behind the session record. Operations are best-effort:
/// a failing store behaves like an absent record.
pub trait SessionCache {
    fn load(&self) -> Option<SessionRecord>;
    fn save(&self, record: &SessionRecord);
    fn clear(&self);
}

/// In-memory cache for tests and headless use.
#[derive(Default)]
pub struct MemorySessionCache {
    record: RefCell<Option<SessionRecord>>,
}

impl SessionCache for MemorySessionCache {
    fn load(&self) -> Option<SessionRecord> {
        self.record.borrow().clone()
    }

    fn save(&self, record: &SessionRecord) {
        *self.record.borrow_mut() = Some(record.clone());
    }

    fn clear(&self) {
        *self.record.borrow_mut() = None;
    }
}

/// What the embedded document can see of its wallet adapter when
/// deciding whether to reconnect.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdapterStatus {
    pub available: bool,
    pub connected: bool,
    pub connecting: bool,
    pub disconnecting: bool,
}

/// Whether a mount should make its one silent reconnect attempt: a
/// prior session must be cached and the adapter must be present but
/// idle. Callers make at most one attempt per mount and clear the cache
/// on failure.
pub fn should_reconnect(record: Option<&SessionRecord>, status: &AdapterStatus) -> bool {
    let had_session = matches!(record, Some(record) if record.connected);
    had_session
        && status.available
        && !status.connected
        && !status.connecting
        && !status.disconnecting
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cached() -> Option<SessionRecord> {
        Some(SessionRecord {
            connected: true,
            public_key: "X".into(),
            wallet_name: Some("Phantom".into()),
        })
    }

    fn idle_adapter() -> AdapterStatus {
        AdapterStatus {
            available: true,
            ..Default::default()
        }
    }

    #[test]
    fn reconnects_only_with_a_cached_session_and_idle_adapter() {
        assert!(should_reconnect(cached().as_ref(), &idle_adapter()));
        assert!(!should_reconnect(None, &idle_adapter()));
        assert!(!should_reconnect(cached().as_ref(), &AdapterStatus::default()));
    }

    #[test]
    fn busy_adapter_suppresses_reconnect() {
        for busy in [
            AdapterStatus {
                connected: true,
                ..idle_adapter()
            },
            AdapterStatus {
                connecting: true,
                ..idle_adapter()
            },
            AdapterStatus {
                disconnecting: true,
                ..idle_adapter()
            },
        ] {
            assert!(!should_reconnect(cached().as_ref(), &busy));
        }
    }

    #[test]
    fn disconnected_record_does_not_reconnect() {
        let record = SessionRecord {
            connected: false,
            public_key: "X".into(),
            wallet_name: None,
        };
        assert!(!should_reconnect(Some(&record), &idle_adapter()));
    }

    #[test]
    fn memory_cache_round_trips_and_clears() {
        let cache = MemorySessionCache::default();
        assert_eq!(cache.load(), None);

        let record = cached().unwrap();
        cache.save(&record);
        assert_eq!(cache.load(), Some(record));

        cache.clear();
        assert_eq!(cache.load(), None);
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = cached().unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "connected": true,
                "publicKey": "X",
                "walletName": "Phantom",
            })
        );
    }
}
