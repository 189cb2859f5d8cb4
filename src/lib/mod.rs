//! Shared frontend utilities for API access, configuration, errors, logging and
//! build metadata.
//!
//! ## Auth API
//!
//! 1. **Login:** `POST /api/auth/login` with `{email, password}`. A 2xx answer
//!    carries `{token, user}`; anything else may carry `{message}`.
//! 2. **Register:** `POST /api/auth/register` as `multipart/form-data` with the
//!    sign-up fields and an optional `profilePicture` part.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging the
//! password or the returned token.

pub(crate) mod api;
#[cfg(target_arch = "wasm32")]
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod telemetry;
#[cfg(target_arch = "wasm32")]
pub(crate) mod theme;

#[cfg(target_arch = "wasm32")]
pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH_SHORT {
    Some(hash) => hash,
    None => "unknown",
};

pub(crate) use errors::AppError;
