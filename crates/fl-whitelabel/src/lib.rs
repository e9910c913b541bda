//! Portable branding for embedded wallet documents.
//!
//! A host page configures the visual identity of an embedded document
//! entirely through URL query parameters: this crate defines the
//! [`WhitelabelConfig`] overlay, the preset theme table, and the
//! query-string codec shared by both sides of the frame boundary.

pub mod codec;
pub mod config;
pub mod presets;

pub use codec::{decode, embed_url, encode};
pub use config::{Brand, Colors, Theme, WhitelabelConfig};
pub use presets::{preset, resolve};
