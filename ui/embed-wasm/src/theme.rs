//! Whitelabel application.
//!
//! Decodes the config from this document's own URL and applies it to the
//! document root: colors and radius as CSS custom properties, the theme
//! as a `theme-light`/`theme-dark` class, brand name and logo into the
//! header. Applying the same config twice produces the same DOM state,
//! and an empty config touches nothing.

use fl_whitelabel::{WhitelabelConfig, decode};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::{self, Elements};

/// Apply a resolved config to the live document.
pub fn apply(els: &Elements, config: &WhitelabelConfig) {
    let Some(root) = dom::document().document_element() else {
        return;
    };

    if let Some(html) = root.dyn_ref::<web_sys::HtmlElement>() {
        let style = html.style();
        if let Some(colors) = &config.colors {
            if let Some(primary) = &colors.primary {
                let _ = style.set_property("--color-primary", primary);
            }
            if let Some(background) = &colors.background {
                let _ = style.set_property("--color-background", background);
            }
            if let Some(text) = &colors.text {
                let _ = style.set_property("--color-text", text);
            }
        }
        if let Some(radius) = &config.border_radius {
            let _ = style.set_property("--border-radius", radius);
        }
    }

    // Exactly one theme class at a time, prior one removed first
    if let Some(theme) = config.theme {
        dom::remove_class(&root, "theme-light");
        dom::remove_class(&root, "theme-dark");
        dom::add_class(&root, theme.class_name());
    }

    if let Some(brand) = &config.brand {
        if let Some(name) = &brand.name {
            dom::set_text(&els.brand_name, name);
        }
        if let Some(logo) = &brand.logo {
            els.brand_logo.set_src(logo);
            dom::remove_class(&els.brand_logo, "hidden");
        }
    }
}

/// Decode this document's query string and apply the result.
pub fn apply_from_location(els: &Elements) {
    let search = dom::window().location().search().unwrap_or_default();
    apply(els, &decode(&search));
}

/// Keep branding live across client-side navigation inside the iframe.
pub fn bind_navigation_reapply(els: &Elements) {
    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        apply_from_location(&els2);
    }) as Box<dyn FnMut(_)>);
    dom::window()
        .add_event_listener_with_callback("popstate", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}
