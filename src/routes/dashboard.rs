//! Home page for signed-in users. It is a placeholder until the dashboard has
//! data to show.

use crate::components::{Alert, AlertKind, AppShell};
use leptos::prelude::*;

/// Renders the dashboard page shell.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <h1 class="text-2xl font-bold text-gray-900 mb-4">"Home"</h1>
            <Alert kind=AlertKind::Info message="Your balance overview will appear here." />
        </AppShell>
    }
}
