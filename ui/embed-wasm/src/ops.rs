//! Wallet operations: connect, disconnect, transfer, balance refresh.

use fl_bridge::display::abbreviate;
use fl_bridge::message::BridgeMessage;
use fl_bridge::notify::WalletSnapshot;
use gloo_console::warn;
use gloo_timers::future::TimeoutFuture;

use crate::adapter;
use crate::bridge_out;
use crate::chain;
use crate::dom::{self, Elements};
use crate::session;
use crate::state;

/// Delay before the post-transfer balance re-query, matching the time
/// the cluster needs to reflect the transfer.
const BALANCE_REFRESH_DELAY_MS: u32 = 1_000;

/// Re-evaluate the wallet state: render it, mirror it into the session
/// cache, and notify the host when this is an actual transition.
pub fn sync_wallet_state(els: &Elements) {
    let snapshot = adapter::snapshot();

    render_wallet(els, &snapshot);
    session::persist_snapshot(&snapshot);

    if let Some(message) = state::observe(&snapshot) {
        bridge_out::post_to_parent(message);
    }

    let refresh = snapshot.connected && snapshot.public_key.is_some();
    state::set_snapshot(snapshot);

    if refresh {
        let els2 = els.clone();
        wasm_bindgen_futures::spawn_local(async move {
            refresh_balance(&els2).await;
        });
    } else {
        dom::set_text(&els.balance_value, "\u{2014}");
    }
}

fn render_wallet(els: &Elements, snapshot: &WalletSnapshot) {
    match (&snapshot.public_key, snapshot.connected) {
        (Some(public_key), true) => {
            let short = abbreviate(public_key, 4);
            dom::set_text(&els.wallet_status, &format!("Connected: {short}"));
        }
        _ => dom::set_text(&els.wallet_status, "Not connected"),
    }
    dom::toggle_class(&els.connect_btn, "hidden", snapshot.connected);
    dom::toggle_class(&els.disconnect_btn, "hidden", !snapshot.connected);
}

pub async fn on_connect(els: &Elements) {
    let Some(provider) = adapter::provider() else {
        dom::set_text(&els.wallet_status, "No wallet provider found");
        return;
    };
    if let Err(err) = provider.connect().await {
        warn!("connect rejected", adapter::error_message(&err));
    }
    sync_wallet_state(els);
}

pub async fn on_disconnect(els: &Elements) {
    if let Some(provider) = adapter::provider() {
        if let Err(err) = provider.disconnect().await {
            warn!("disconnect failed", adapter::error_message(&err));
        }
    }
    sync_wallet_state(els);
}

/// Fetch and display the balance. A response is applied only while its
/// request is still the newest, so responses never race backwards; a
/// failed query leaves the prior display untouched.
pub async fn refresh_balance(els: &Elements) {
    let Some(public_key) = state::snapshot().public_key else {
        return;
    };
    let seq = state::begin_balance_request();

    match chain::fetch_balance(&public_key).await {
        Ok(sol) => {
            if state::is_latest_balance_request(seq) {
                dom::set_text(&els.balance_value, &format!("{sol:.4} SOL"));
            }
        }
        Err(err) => warn!("balance query failed", err.to_string()),
    }
}

pub async fn on_transfer(els: &Elements) {
    let recipient = dom::get_input_value(&els.recipient_input);
    let amount_raw = dom::get_input_value(&els.amount_input);
    if recipient.is_empty() || amount_raw.is_empty() {
        return;
    }
    let amount: f64 = match amount_raw.parse() {
        Ok(amount) if amount > 0.0 => amount,
        _ => {
            dom::set_text(&els.transfer_message, "\u{274c} Enter a valid amount");
            return;
        }
    };
    let Some(provider) = adapter::provider() else {
        dom::set_text(&els.transfer_message, "\u{274c} No wallet provider found");
        return;
    };

    // one transfer at a time: a second click while the wallet prompt is
    // up must not submit again
    if !state::begin_transfer() {
        return;
    }

    dom::set_text(&els.transfer_message, "");
    dom::set_text(&els.send_btn, "Sending...");

    match chain::submit_transfer(&provider, &recipient, amount).await {
        Ok(signature) => {
            let short: String = signature.chars().take(8).collect();
            dom::set_text(
                &els.transfer_message,
                &format!("\u{2705} Transfer successful: {short}..."),
            );

            // exactly one success message per completed transfer
            bridge_out::post_to_parent(BridgeMessage::TransactionSuccess { signature });

            dom::set_input_value(&els.recipient_input, "");
            dom::set_input_value(&els.amount_input, "");

            dom::set_text(&els.send_btn, "Send SOL");
            state::end_transfer();

            TimeoutFuture::new(BALANCE_REFRESH_DELAY_MS).await;
            refresh_balance(els).await;
        }
        Err(err) => {
            dom::set_text(
                &els.transfer_message,
                &format!("\u{274c} Transfer failed: {err}"),
            );
            dom::set_text(&els.send_btn, "Send SOL");
            state::end_transfer();
        }
    }
}

/// Ask the host to switch the whole document to another preset.
pub fn request_theme(theme: &str) {
    bridge_out::post_to_parent(BridgeMessage::Navigate {
        theme: theme.to_string(),
    });
}
