//! Cross-document notification protocol between an embedded wallet
//! document and its hosting page.
//!
//! The wire contract is a tagged JSON object `{ type, version, ...payload }`
//! delivered over the browser's cross-document messaging channel. This
//! crate holds everything about that contract that does not need a DOM:
//! the message vocabulary, the versioned envelope codec, the
//! edge-triggered connection notifier, the host-side state reducer, the
//! origin allow-list, and the persisted session cache.

pub mod display;
pub mod message;
pub mod notify;
pub mod origin;
pub mod reducer;
pub mod session;

pub use display::abbreviate;
pub use message::{BridgeMessage, Envelope, PROTOCOL_VERSION, decode};
pub use notify::{ConnectionNotifier, WalletSnapshot};
pub use origin::origin_allowed;
pub use reducer::{HostState, WalletSession};
pub use session::{
    AdapterStatus, MemorySessionCache, SESSION_KEY, SessionCache, SessionRecord, should_reconnect,
};
