//! FrameLink host document.
//!
//! The parent page: owns the branding controls, serializes them into the
//! iframe URL, and listens for bridge messages from the embedded wallet
//! to render connection and transaction status.

pub mod controls;
pub mod dom;
pub mod receiver;
pub mod state;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let els = dom::Elements::bind()?;

    receiver::bind_message_listener(&els);
    controls::bind_controls(&els);
    controls::rebuild_frame(&els);

    Ok(())
}
