//! Side navigation for the dashboard pages.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

const LINK_BASE: &str = "group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors";
const LINK_ACTIVE: &str = "text-emerald-700 bg-emerald-50";
const LINK_IDLE: &str = "text-gray-600 hover:bg-gray-50 hover:text-gray-900";

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = Signal::derive(move || location.pathname.get());

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 bg-white overflow-y-auto">
            <nav class="flex-1 px-4 py-6 space-y-1">
                <SidebarLink target=paths::DASHBOARD icon="home" label="Home" pathname=pathname />
                <SidebarLink
                    target=paths::INCOME
                    icon="payments"
                    label="Income"
                    pathname=pathname
                />
                <SidebarLink
                    target=paths::EXPENSE
                    icon="receipt_long"
                    label="Expense"
                    pathname=pathname
                />
            </nav>
        </aside>
    }
}

#[component]
fn SidebarLink(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    pathname: Signal<String>,
) -> impl IntoView {
    let active = move || pathname.get() == target;
    let class = move || {
        let state = if active() { LINK_ACTIVE } else { LINK_IDLE };
        format!("{LINK_BASE} {state}")
    };

    view! {
        <A href=target {..} class=class>
            <span class="material-symbols-outlined mr-3 text-xl">{icon}</span>
            {label}
        </A>
    }
}
