//! Session gate for the root path. The decision is presence-only: any non-empty
//! stored token sends the user to the dashboard. The token is never checked for
//! signature, expiry or authenticity, so this is navigation UX and not access
//! control; the API must reject bad tokens on its own.

use super::store::{CredentialStore, TOKEN_KEY};

/// Where the root path should send the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    Dashboard,
    Login,
}

impl Landing {
    pub fn path(self) -> &'static str {
        match self {
            Landing::Dashboard => crate::routes::paths::DASHBOARD,
            Landing::Login => crate::routes::paths::LOGIN,
        }
    }
}

/// Returns `true` when a non-empty token is stored. A store that cannot be read
/// counts as "no credential".
pub fn has_credential(store: &dyn CredentialStore) -> bool {
    match store.get(TOKEN_KEY) {
        Ok(Some(token)) => !token.is_empty(),
        Ok(None) => false,
        Err(err) => {
            tracing::warn!(error = %err, "credential store unreadable; treating as signed out");
            false
        }
    }
}

/// Evaluates the root route.
pub fn resolve_root(store: &dyn CredentialStore) -> Landing {
    if has_credential(store) {
        Landing::Dashboard
    } else {
        Landing::Login
    }
}
