//! One-shot initial view selection.
//!
//! Runs once when the page structure is ready: reads the session token and
//! hands control to exactly one of two renderers.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::BootstrapError;
use crate::session::{SessionStore, TokenPresence, SESSION_TOKEN_KEY};

/// Renders the unauthenticated view.
pub trait LoginRenderer {
    fn render_login(&self);
}

/// Renders the authenticated view.
pub trait ProfileRenderer {
    fn render_profile(&self);
}

impl<F: Fn()> LoginRenderer for F {
    fn render_login(&self) {
        self()
    }
}

impl<F: Fn()> ProfileRenderer for F {
    fn render_profile(&self) {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialView {
    Login,
    Profile,
}

impl InitialView {
    pub fn label(self) -> &'static str {
        match self {
            InitialView::Login => "login",
            InitialView::Profile => "profile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    pub token_key: String,
    pub presence: TokenPresence,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            token_key: SESSION_TOKEN_KEY.to_string(),
            presence: TokenPresence::default(),
        }
    }
}

pub fn select_view(token: Option<&str>, presence: TokenPresence) -> InitialView {
    if presence.is_present(token) {
        InitialView::Profile
    } else {
        InitialView::Login
    }
}

/// Whether `document.readyState` says the structure is already parsed, in
/// which case `DOMContentLoaded` has fired and will not fire again.
pub fn structure_already_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

pub struct Bootstrap<S, L, P> {
    store: S,
    login: L,
    profile: P,
    config: BootstrapConfig,
}

impl<S, L, P> Bootstrap<S, L, P>
where
    S: SessionStore,
    L: LoginRenderer,
    P: ProfileRenderer,
{
    pub fn new(store: S, login: L, profile: P) -> Self {
        Self::with_config(store, login, profile, BootstrapConfig::default())
    }

    pub fn with_config(store: S, login: L, profile: P, config: BootstrapConfig) -> Self {
        Self {
            store,
            login,
            profile,
            config,
        }
    }

    /// Dispatch to one renderer. Consumes the bootstrap: the lifecycle signal
    /// fires once per page load.
    pub fn run(self) -> Result<(), BootstrapError> {
        let key = self.config.token_key.as_str();
        let token = self.store.get(key).inspect_err(|e| {
            warn!(key, error = %e, "session token read failed");
        })?;

        let view = select_view(token.as_deref(), self.config.presence);
        debug!(
            key,
            view = view.label(),
            presence = self.config.presence.label(),
            "initial view selected"
        );

        match view {
            InitialView::Profile => self.profile.render_profile(),
            InitialView::Login => self.login.render_login(),
        }
        Ok(())
    }
}
