//! Global application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).

use std::cell::RefCell;

use fl_bridge::message::BridgeMessage;
use fl_bridge::notify::{ConnectionNotifier, WalletSnapshot};

/// Central application state.
#[derive(Debug, Default)]
pub struct AppState {
    pub snapshot: WalletSnapshot,
    pub notifier: ConnectionNotifier,
    /// Sequence number of the most recently issued balance request.
    /// A response is applied only while its request is still the newest,
    /// so a slow early response never clobbers a later one.
    pub balance_seq: u64,
    /// Set while a transfer submission is awaiting the wallet and the
    /// cluster; further submissions are refused until it clears.
    pub transfer_in_flight: bool,
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn snapshot() -> WalletSnapshot {
    with(|s| s.snapshot.clone())
}

pub fn set_snapshot(snapshot: WalletSnapshot) {
    with_mut(|s| s.snapshot = snapshot);
}

/// Feed the notifier one state observation; returns the message to send
/// when this observation is an actual transition.
pub fn observe(snapshot: &WalletSnapshot) -> Option<BridgeMessage> {
    with_mut(|s| s.notifier.observe(snapshot))
}

/// Issue a new balance request sequence number.
pub fn begin_balance_request() -> u64 {
    with_mut(|s| {
        s.balance_seq += 1;
        s.balance_seq
    })
}

/// Whether the given request is still the newest one issued.
pub fn is_latest_balance_request(seq: u64) -> bool {
    with(|s| s.balance_seq == seq)
}

/// Claim the transfer slot. Returns false while an earlier transfer is
/// still in flight, in which case the caller must not submit.
pub fn begin_transfer() -> bool {
    with_mut(|s| {
        if s.transfer_in_flight {
            false
        } else {
            s.transfer_in_flight = true;
            true
        }
    })
}

/// Release the transfer slot once a submission settles, on success or
/// failure alike.
pub fn end_transfer() {
    with_mut(|s| s.transfer_in_flight = false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_transfer_is_refused_until_the_first_settles() {
        end_transfer();
        assert!(begin_transfer());
        assert!(!begin_transfer());
        end_transfer();
        assert!(begin_transfer());
        end_transfer();
    }
}
