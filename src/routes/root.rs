//! Root path: runs the session gate once and redirects.

use crate::features::session::{gate::resolve_root, state::use_session};
use leptos::prelude::*;
use leptos_router::components::Redirect;

#[component]
pub fn RootRedirect() -> impl IntoView {
    let session = use_session();
    let landing = resolve_root(session.store());
    tracing::debug!(?landing, "root route evaluated");

    view! { <Redirect path=landing.path() /> }
}
