//! Client-side session handling: the injected credential store, the root-path
//! gate, and the Leptos context and guard built on top of them. Everything here
//! is navigation UX; the API remains the only real access control. Never log
//! the token or the stored user blob.

pub(crate) mod gate;
#[cfg(target_arch = "wasm32")]
mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod store;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireAuth;
