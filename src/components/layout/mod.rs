//! Layout components shared across routes.

mod app_shell;
mod auth_layout;
mod sidebar;

pub(crate) use app_shell::AppShell;
pub(crate) use auth_layout::AuthLayout;
pub(crate) use sidebar::Sidebar;
