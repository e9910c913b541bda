//! FrameLink embedded wallet document.
//!
//! Runs inside the iframe. On load it decodes the whitelabel config from
//! its own URL and applies it to the document, restores a cached wallet
//! session with one silent reconnect attempt, and from then on reports
//! wallet and transaction state to the hosting page over the bridge.

pub mod adapter;
pub mod bridge_out;
pub mod chain;
pub mod dom;
pub mod events;
pub mod ops;
pub mod session;
pub mod state;
pub mod theme;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    init().await
}

/// Main initialisation sequence.
async fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Branding first, before anything else renders
    theme::apply_from_location(&els);
    theme::bind_navigation_reapply(&els);

    // One silent reconnect attempt if a prior session is cached
    session::try_restore().await;

    // Announce the current wallet state to the host (a disconnected
    // mount reports wallet-disconnected)
    ops::sync_wallet_state(&els);

    events::bind_events(&els);

    Ok(())
}
