//! Bridge sender.
//!
//! Serializes messages and posts them to the hosting document.
//! Delivery is fire-and-forget: no acknowledgment, no retry. Ordering is
//! whatever the browser guarantees for one sender (FIFO).

use fl_bridge::message::{BridgeMessage, Envelope};
use gloo_console::warn;
use serde::Serialize;

use crate::dom;

/// Origins this document agrees to be hosted by. Empty = demo mode:
/// messages are broadcast with a wildcard target.
const ALLOWED_PARENT_ORIGINS: &[&str] = &[];

fn target_origin() -> &'static str {
    ALLOWED_PARENT_ORIGINS.first().copied().unwrap_or("*")
}

/// Post one message to the parent frame. A top-level document (no
/// parent) or a failed post is logged and otherwise ignored.
pub fn post_to_parent(message: BridgeMessage) {
    let envelope = Envelope::new(message);
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let value = match envelope.serialize(&serializer) {
        Ok(value) => value,
        Err(err) => {
            warn!("bridge message serialization failed", err.to_string());
            return;
        }
    };

    match dom::window().parent() {
        Ok(Some(parent)) => {
            if let Err(err) = parent.post_message(&value, target_origin()) {
                warn!("bridge post failed", err);
            }
        }
        _ => warn!("no parent frame; bridge message dropped"),
    }
}
