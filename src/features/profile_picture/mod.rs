//! Profile picture intake: validation, decode sequencing and the change events
//! the sign-up form listens to. Rendering lives in
//! `components::ProfilePictureSelector`.

pub(crate) mod intake;

#[cfg(target_arch = "wasm32")]
pub(crate) use intake::{ImageCandidate, ImageIntake, Selection};
