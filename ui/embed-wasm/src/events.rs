//! Event binding.
//!
//! Wires all UI event listeners. To add new events, add closures here
//! and (if async) spawn via `wasm_bindgen_futures::spawn_local`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::adapter;
use crate::dom::Elements;
use crate::ops;

/// Helper: attach async click handler to an HtmlElement.
macro_rules! on_click_async {
    ($el:expr, $els:expr, $handler:expr) => {{
        let els = $els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let els2 = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                $handler(&els2).await;
            });
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    // ── Connection ──
    on_click_async!(els.connect_btn, els, ops::on_connect);
    on_click_async!(els.disconnect_btn, els, ops::on_disconnect);

    // ── Transfer ──
    on_click_async!(els.send_btn, els, ops::on_transfer);

    // ── Provider-driven transitions (extension connect/disconnect,
    // account switch) re-trigger the bridge sender ──
    if let Some(provider) = adapter::provider() {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: JsValue| {
            ops::sync_wallet_state(&els2);
        }) as Box<dyn FnMut(JsValue)>);
        for event in ["connect", "disconnect", "accountChanged"] {
            provider.on(event, cb.as_ref().unchecked_ref());
        }
        cb.forget();
    }

    // ── Theme quick-switch ──
    for btn in &els.theme_switches {
        let theme = btn.get_attribute("data-theme").unwrap_or_default();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            if !theme.is_empty() {
                ops::request_theme(&theme);
            }
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}
