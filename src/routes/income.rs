use crate::components::{Alert, AlertKind, AppShell};
use leptos::prelude::*;

#[component]
pub fn IncomePage() -> impl IntoView {
    view! {
        <AppShell>
            <h1 class="text-2xl font-bold text-gray-900 mb-4">"Income"</h1>
            <Alert kind=AlertKind::Info message="No income recorded yet." />
        </AppShell>
    }
}
