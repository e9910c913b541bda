//! Wallet provider boundary.
//!
//! Thin bindings to the injected provider object (`window.walletProvider`,
//! Phantom-style). Everything the rest of the app consumes is the
//! snapshot triple: connected flag, public key, wallet name.

use fl_bridge::notify::WalletSnapshot;
use fl_bridge::session::AdapterStatus;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type WalletProvider;

    #[wasm_bindgen(method, getter, js_name = isConnected)]
    pub fn is_connected(this: &WalletProvider) -> bool;

    #[wasm_bindgen(method, getter, js_name = isConnecting)]
    pub fn is_connecting(this: &WalletProvider) -> bool;

    #[wasm_bindgen(method, getter, js_name = isDisconnecting)]
    pub fn is_disconnecting(this: &WalletProvider) -> bool;

    #[wasm_bindgen(method, getter, js_name = publicKey)]
    pub fn public_key(this: &WalletProvider) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = walletName)]
    pub fn wallet_name(this: &WalletProvider) -> Option<String>;

    #[wasm_bindgen(method, catch)]
    pub async fn connect(this: &WalletProvider) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub async fn disconnect(this: &WalletProvider) -> Result<JsValue, JsValue>;

    /// Builds, signs, and submits a transfer; resolves to the signature.
    #[wasm_bindgen(method, catch, js_name = signAndSendTransfer)]
    pub async fn sign_and_send_transfer(
        this: &WalletProvider,
        to: &str,
        lamports: f64,
    ) -> Result<JsValue, JsValue>;

    /// Subscribe to provider events (`connect`, `disconnect`,
    /// `accountChanged`).
    #[wasm_bindgen(method)]
    pub fn on(this: &WalletProvider, event: &str, callback: &js_sys::Function);
}

/// The injected provider, if one is present on this page.
pub fn provider() -> Option<WalletProvider> {
    let window = gloo_utils::window();
    js_sys::Reflect::get(&window, &JsValue::from_str("walletProvider"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .map(|v| v.unchecked_into())
}

/// Current wallet state as the rest of the app sees it.
pub fn snapshot() -> WalletSnapshot {
    match provider() {
        Some(p) if p.is_connected() => WalletSnapshot {
            connected: true,
            public_key: p.public_key(),
            wallet_name: p.wallet_name(),
        },
        _ => WalletSnapshot::default(),
    }
}

/// Adapter availability for the reconnect decision.
pub fn status() -> AdapterStatus {
    match provider() {
        Some(p) => AdapterStatus {
            available: true,
            connected: p.is_connected(),
            connecting: p.is_connecting(),
            disconnecting: p.is_disconnecting(),
        },
        None => AdapterStatus::default(),
    }
}

/// Human-readable description of a provider rejection.
pub fn error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown error".into())
}
