//! Shell for the signed-in pages: header with sign-out, side navigation and the
//! content container. Navigation is client-side only; the API must enforce
//! access control.

use crate::{
    app_lib::GIT_COMMIT_HASH,
    components::layout::Sidebar,
    features::session::state::use_session,
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

/// Wraps dashboard routes with a header, the sidebar and a main container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let sign_out = move |_| {
        session.sign_out();
        navigate(paths::LOGIN, Default::default());
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="border-b border-gray-200 bg-white">
                <div class="max-w-screen-xl flex items-center justify-between mx-auto p-4">
                    <A href=paths::DASHBOARD {..} class="flex items-center space-x-3">
                        <span class="material-symbols-outlined text-emerald-600 text-3xl">
                            "account_balance_wallet"
                        </span>
                        <span class="font-semibold whitespace-nowrap">"ExpenseTracker"</span>
                    </A>
                    <button
                        type="button"
                        class="py-2 px-3 text-gray-900 rounded hover:bg-gray-100 hover:text-emerald-700"
                        on:click=sign_out
                    >
                        "Sign Out"
                    </button>
                </div>
            </header>
            <div class="flex flex-1">
                <Sidebar />
                <main class="flex-1">
                    <div class="container mx-auto p-4 mt-6">{children()}</div>
                </main>
            </div>
            <footer class="p-2 text-center">
                <p class="text-[10px] text-gray-400 font-mono uppercase tracking-tighter">
                    {format!("build {GIT_COMMIT_HASH}")}
                </p>
            </footer>
        </div>
    }
}
