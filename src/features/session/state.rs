//! Session context shared through Leptos. The provider picks the credential
//! store once on mount and exposes a reactive "signed in" flag for the guard
//! and the application shell.

use crate::{
    app_lib::AppError,
    features::{
        auth::{persist_session, types::LoginResponse},
        session::{
            gate::has_credential,
            store::{BrowserStore, CredentialStore, MemoryStore},
        },
    },
};
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Clone)]
/// Session context shared through Leptos.
pub struct SessionContext {
    store: Arc<dyn CredentialStore>,
    pub signed_in: RwSignal<bool>,
}

impl SessionContext {
    /// Builds a context around `store` and evaluates the gate once.
    fn new(store: Arc<dyn CredentialStore>) -> Self {
        let signed_in = RwSignal::new(has_credential(store.as_ref()));
        Self { store, signed_in }
    }

    pub fn store(&self) -> &dyn CredentialStore {
        self.store.as_ref()
    }

    /// Re-reads the store; another tab may have signed in or out.
    pub fn refresh(&self) -> bool {
        let present = has_credential(self.store());
        self.signed_in.set(present);
        present
    }

    /// Persists a successful login and flips the flag.
    pub fn sign_in(&self, response: &LoginResponse) -> Result<(), AppError> {
        persist_session(self.store(), response)?;
        self.signed_in.set(true);
        Ok(())
    }

    /// Forgets the stored credential. Storage failures are logged, the flag is
    /// cleared regardless.
    pub fn sign_out(&self) {
        if let Err(err) = self.store().clear() {
            tracing::warn!(error = %err, "failed to clear stored credentials");
        }
        self.signed_in.set(false);
        tracing::info!("signed out");
    }
}

fn default_store() -> Arc<dyn CredentialStore> {
    match BrowserStore::detect() {
        Some(store) => Arc::new(store),
        None => {
            tracing::warn!("local storage unavailable; the session will not survive a reload");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Provides the session context for the whole app.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::new(default_store()));

    view! { {children()} }
}

/// Returns the current session context or a fresh one over the default store.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext::new(default_store()))
}
