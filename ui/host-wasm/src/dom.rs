//! DOM element bindings for the host page.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlIFrameElement, HtmlInputElement, HtmlSelectElement};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn get_select_value(el: &HtmlSelectElement) -> String {
    el.value()
}

pub fn set_select_value(el: &HtmlSelectElement, val: &str) {
    el.set_value(val);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

// ── Elements struct ──

/// All DOM element references used by the host controller.
#[derive(Clone)]
pub struct Elements {
    // Branding controls
    pub preset_select: HtmlSelectElement,
    pub brand_input: HtmlInputElement,
    pub logo_input: HtmlInputElement,
    pub primary_input: HtmlInputElement,
    pub background_input: HtmlInputElement,
    pub text_input: HtmlInputElement,
    pub radius_input: HtmlInputElement,
    pub embed_base_input: HtmlInputElement,

    // Embedded document
    pub embed_frame: HtmlIFrameElement,
    pub frame_title: Element,

    // Status panels
    pub wallet_panel: Element,
    pub wallet_detail: Element,
    pub tx_panel: Element,
    pub tx_signature: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_select {
    ($id:expr) => {
        by_id_typed::<HtmlSelectElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing select #{}", $id)))?
    };
}

macro_rules! get_iframe {
    ($id:expr) => {
        by_id_typed::<HtmlIFrameElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing iframe #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            preset_select: get_select!("presetSelect"),
            brand_input: get_input!("brandInput"),
            logo_input: get_input!("logoInput"),
            primary_input: get_input!("primaryInput"),
            background_input: get_input!("backgroundInput"),
            text_input: get_input!("textInput"),
            radius_input: get_input!("radiusInput"),
            embed_base_input: get_input!("embedBaseInput"),

            embed_frame: get_iframe!("embedFrame"),
            frame_title: get_el!("frameTitle"),

            wallet_panel: get_el!("walletPanel"),
            wallet_detail: get_el!("walletDetail"),
            tx_panel: get_el!("txPanel"),
            tx_signature: get_el!("txSignature"),
        })
    }
}
