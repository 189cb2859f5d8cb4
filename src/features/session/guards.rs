use crate::{features::session::state::use_session, routes::paths};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Renders `children` only while a credential is stored, otherwise sends the
/// user to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let signed_in = session.signed_in;
    session.refresh();

    Effect::new(move |_| {
        if !signed_in.get() {
            // UX-only guard; real access control must live on the API.
            navigate(paths::LOGIN, Default::default());
        }
    });

    view! { <Show when=move || signed_in.get()>{children()}</Show> }
}
