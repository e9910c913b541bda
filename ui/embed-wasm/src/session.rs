//! Wallet session cache and auto-reconnect.
//!
//! One versioned record in localStorage. On mount, if a prior session is
//! cached and the provider is present but idle, make a single silent
//! reconnect attempt; failure clears the cache. No retry, no backoff.

use fl_bridge::session::{SESSION_KEY, SessionCache, SessionRecord, should_reconnect};
use gloo_console::debug;
use gloo_storage::{LocalStorage, Storage};

use crate::adapter;

/// [`SessionCache`] backed by this document's localStorage.
#[derive(Default)]
pub struct LocalSessionCache;

impl SessionCache for LocalSessionCache {
    fn load(&self) -> Option<SessionRecord> {
        LocalStorage::get(SESSION_KEY).ok()
    }

    fn save(&self, record: &SessionRecord) {
        let _ = LocalStorage::set(SESSION_KEY, record);
    }

    fn clear(&self) {
        LocalStorage::delete(SESSION_KEY);
    }
}

/// The one reconnect attempt this mount gets.
pub async fn try_restore() {
    let cache = LocalSessionCache;
    let record = cache.load();
    if !should_reconnect(record.as_ref(), &adapter::status()) {
        return;
    }

    let Some(provider) = adapter::provider() else {
        return;
    };
    if let Err(err) = provider.connect().await {
        debug!("silent reconnect failed", adapter::error_message(&err));
        cache.clear();
    }
}

/// Mirror the current snapshot into the cache: save while connected with
/// a known public key, clear otherwise.
pub fn persist_snapshot(snapshot: &fl_bridge::notify::WalletSnapshot) {
    let cache = LocalSessionCache;
    match (&snapshot.public_key, snapshot.connected) {
        (Some(public_key), true) => cache.save(&SessionRecord {
            connected: true,
            public_key: public_key.clone(),
            wallet_name: snapshot.wallet_name.clone(),
        }),
        _ => cache.clear(),
    }
}
