//! Fallback for unknown paths.

use crate::{components::AuthLayout, routes::paths};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

/// Names the missing path and offers a way back through the root redirect.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    let missing = move || location.pathname.get();

    view! {
        <AuthLayout
            headline="ExpenseTracker"
            tagline="Take control of your finances with our intuitive tracking solution"
            title="Page not found"
            subtitle="Nothing lives at this address."
        >
            <div class="text-center space-y-6">
                <p class="font-mono text-sm text-gray-500 break-all">{missing}</p>
                <A
                    href=paths::ROOT
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-emerald-600 rounded-lg hover:bg-emerald-700"
                >
                    <span class="material-symbols-outlined mr-2 text-base">"home"</span>
                    "Take me home"
                </A>
            </div>
        </AuthLayout>
    }
}
