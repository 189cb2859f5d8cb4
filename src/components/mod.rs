//! Shared UI components exported for routes and features.

pub(crate) mod layout;
mod profile_picture;
pub(crate) mod ui;

pub(crate) use layout::{AppShell, AuthLayout};
pub(crate) use profile_picture::ProfilePictureSelector;
pub(crate) use ui::{Alert, AlertKind, Button, Field};
