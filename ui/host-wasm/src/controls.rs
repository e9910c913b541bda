//! Branding controls → iframe URL.
//!
//! Reads the preset select and the override inputs, resolves them
//! through the whitelabel layer, and points the iframe at the encoded
//! result. Rebuilt on every control change.

use fl_whitelabel::{Brand, Colors, WhitelabelConfig, embed_url, resolve};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::{self, Elements};

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Overrides currently entered in the host controls. Empty inputs set
/// nothing, so the preset's own values show through.
fn overrides(els: &Elements) -> WhitelabelConfig {
    let name = non_empty(dom::get_input_value(&els.brand_input));
    let logo = non_empty(dom::get_input_value(&els.logo_input));
    let primary = non_empty(dom::get_input_value(&els.primary_input));
    let background = non_empty(dom::get_input_value(&els.background_input));
    let text = non_empty(dom::get_input_value(&els.text_input));

    WhitelabelConfig {
        brand: (name.is_some() || logo.is_some()).then(|| Brand { name, logo }),
        colors: (primary.is_some() || background.is_some() || text.is_some()).then(|| Colors {
            primary,
            background,
            text,
        }),
        theme: None,
        border_radius: non_empty(dom::get_input_value(&els.radius_input)),
    }
}

/// The fully resolved config the iframe should render.
pub fn current_config(els: &Elements) -> WhitelabelConfig {
    let preset = dom::get_select_value(&els.preset_select);
    resolve(Some(&preset), Some(&overrides(els)))
}

fn base_url(els: &Elements) -> String {
    let value = dom::get_input_value(&els.embed_base_input);
    if value.is_empty() {
        "./embed/index.html".to_string()
    } else {
        value.trim_end_matches('?').to_string()
    }
}

/// Re-point the iframe at the current configuration.
pub fn rebuild_frame(els: &Elements) {
    let config = current_config(els);
    els.embed_frame.set_src(&embed_url(&base_url(els), &config));

    let preset = dom::get_select_value(&els.preset_select);
    dom::set_text(
        &els.frame_title,
        &format!("dApp iFrame \u{2014} {} theme", preset.to_uppercase()),
    );
}

/// Switch the preset select (on a `navigate` request) and rebuild.
pub fn set_preset(els: &Elements, preset: &str) {
    dom::set_select_value(&els.preset_select, preset);
    rebuild_frame(els);
}

/// Rebuild the iframe URL whenever any branding control changes.
pub fn bind_controls(els: &Elements) {
    let inputs: [&web_sys::EventTarget; 7] = [
        &els.preset_select,
        &els.brand_input,
        &els.logo_input,
        &els.primary_input,
        &els.background_input,
        &els.text_input,
        &els.radius_input,
    ];
    for target in inputs {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            rebuild_frame(&els2);
        }) as Box<dyn FnMut(_)>);
        target
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}
