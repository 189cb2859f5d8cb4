//! Auth feature module covering login and sign-up. It keeps request shaping,
//! response interpretation and form validation out of the UI. This module
//! handles passwords and bearer tokens and must never log them.
//!
//! Flow Overview: Login posts JSON credentials, stores the returned token and
//! user, then lands on the dashboard. Sign-up validates locally, posts a
//! multipart form, then sends the user to the login page.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
mod login;
pub(crate) mod signup;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use login::persist_session;
