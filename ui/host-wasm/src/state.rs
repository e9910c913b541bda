//! Host application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).

use std::cell::RefCell;

use fl_bridge::reducer::HostState;
use gloo_timers::callback::Timeout;

/// Central host state: the reduced view of inbound bridge messages plus
/// the pending transaction-display clear timer. At most one clear timer
/// exists at a time; replacing it drops (cancels) the previous one.
#[derive(Default)]
pub struct App {
    pub host: HostState,
    pub clear_timer: Option<Timeout>,
}

thread_local! {
    static STATE: RefCell<App> = RefCell::new(App::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&App) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut App) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

/// Replace the pending clear timer; the superseded one is cancelled by drop.
pub fn set_clear_timer(timer: Option<Timeout>) {
    with_mut(|s| s.clear_timer = timer);
}
