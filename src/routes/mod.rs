#[cfg(target_arch = "wasm32")]
mod dashboard;
#[cfg(target_arch = "wasm32")]
mod expense;
#[cfg(target_arch = "wasm32")]
mod income;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
pub(crate) mod paths;
#[cfg(target_arch = "wasm32")]
mod root;
#[cfg(target_arch = "wasm32")]
mod signup;

#[cfg(target_arch = "wasm32")]
use self::{
    dashboard::DashboardPage, expense::ExpensePage, income::IncomePage, login::LoginPage,
    not_found::NotFoundPage, root::RootRedirect, signup::SignUpPage,
};
#[cfg(target_arch = "wasm32")]
use crate::features::session::RequireAuth;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use leptos_router::{
    components::{Route, Routes},
    path,
};

/// Route table. Dashboard pages sit behind `RequireAuth`; `/` only redirects.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=RootRedirect />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/signUp") view=SignUpPage />
            <Route
                path=path!("/dashboard")
                view=|| view! { <RequireAuth><DashboardPage /></RequireAuth> }
            />
            <Route path=path!("/income") view=|| view! { <RequireAuth><IncomePage /></RequireAuth> } />
            <Route
                path=path!("/Expense")
                view=|| view! { <RequireAuth><ExpensePage /></RequireAuth> }
            />
        </Routes>
    }
}
