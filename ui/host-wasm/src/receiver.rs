//! Bridge receiver.
//!
//! Listens for message events on the window, filters by origin, decodes
//! through the bridge protocol (unknown types and foreign versions are
//! no-ops), folds recognized messages into the host state, and renders
//! the status panels.

use fl_bridge::display::abbreviate;
use fl_bridge::message::{BridgeMessage, decode};
use fl_bridge::origin::origin_allowed;
use gloo_console::debug;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::controls;
use crate::dom::{self, Elements};
use crate::state;

/// Origins whose messages may drive this page. Empty = demo mode.
const ALLOWED_EMBED_ORIGINS: &[&str] = &[];

/// How long a submitted signature stays on screen.
const SIGNATURE_DISPLAY_MS: u32 = 5_000;

pub fn bind_message_listener(els: &Elements) {
    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |event: web_sys::MessageEvent| {
        let allow: Vec<String> = ALLOWED_EMBED_ORIGINS.iter().map(|s| s.to_string()).collect();
        if !origin_allowed(&allow, &event.origin()) {
            debug!("dropped message from", event.origin());
            return;
        }
        let Ok(value) = serde_wasm_bindgen::from_value::<serde_json::Value>(event.data()) else {
            return;
        };
        let Some(message) = decode(value) else {
            return;
        };
        handle(&els2, message);
    }) as Box<dyn FnMut(_)>);
    dom::window()
        .add_event_listener_with_callback("message", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

fn handle(els: &Elements, message: BridgeMessage) {
    state::with_mut(|s| s.host.apply(message.clone()));

    match message {
        BridgeMessage::WalletConnected { .. } | BridgeMessage::WalletDisconnected => {
            render_wallet_panel(els);
        }
        BridgeMessage::TransactionSuccess { .. } => {
            render_tx_panel(els);
            schedule_signature_clear(els);
        }
        BridgeMessage::Navigate { theme } => {
            controls::set_preset(els, &theme);
        }
    }
}

fn render_wallet_panel(els: &Elements) {
    let session = state::with(|s| s.host.wallet.clone());
    match session {
        Some(session) if session.connected => {
            let public_key = session.public_key.unwrap_or_default();
            let short = abbreviate(&public_key, 8);
            let wallet = session.wallet.unwrap_or_else(|| "Wallet".into());
            dom::set_text(&els.wallet_detail, &format!("{wallet} \u{2022} {short}"));
            dom::toggle_class(&els.wallet_panel, "hidden", false);
        }
        _ => dom::toggle_class(&els.wallet_panel, "hidden", true),
    }
}

fn render_tx_panel(els: &Elements) {
    let signature = state::with(|s| s.host.last_signature.clone());
    match signature {
        Some(signature) => {
            dom::set_text(&els.tx_signature, &abbreviate(&signature, 8));
            dom::toggle_class(&els.tx_panel, "hidden", false);
        }
        None => dom::toggle_class(&els.tx_panel, "hidden", true),
    }
}

/// Show the signature for a fixed window, then revert. A new success
/// while one is pending replaces the timer instead of stacking a second.
fn schedule_signature_clear(els: &Elements) {
    let els2 = els.clone();
    let timer = Timeout::new(SIGNATURE_DISPLAY_MS, move || {
        state::with_mut(|s| s.host.clear_last_signature());
        render_tx_panel(&els2);
    });
    state::set_clear_timer(Some(timer));
}
