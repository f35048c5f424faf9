//! Browser bootstrap that picks the initial view from the stored session token.
//!
//! The decision logic (`session`, `bootstrap`) builds and tests on the host.
//! The browser glue is behind `--features web` (and a wasm32 target).

pub mod bootstrap;
pub mod error;
pub mod session;

pub use bootstrap::{
    select_view, Bootstrap, BootstrapConfig, InitialView, LoginRenderer, ProfileRenderer,
};
pub use error::BootstrapError;
pub use session::{MemoryStore, SessionStore, TokenPresence, SESSION_TOKEN_KEY};

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{start, LocalStorage};
