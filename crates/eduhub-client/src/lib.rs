//! # eduhub-client
//!
//! The remote-sync adapter: every structural mutation in the console goes
//! through this crate as one or more backend requests, followed by an
//! unconditional reload of the authoritative state. There is no local-only
//! commit and no automatic retry anywhere; call sites decide how failures
//! surface.
//!
//! The bearer token lives in an explicit [`Session`] injected into the
//! [`ApiClient`] — no component reads ambient global storage.

pub mod api;
pub mod client;
pub mod seq;
pub mod session;
pub mod socket;
pub mod tree_store;

pub use client::ApiClient;
pub use seq::RequestSequence;
pub use session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
pub use socket::ChatSocket;
pub use tree_store::TreeStore;
