//! Split-screen layout for the login and sign-up pages: a branding panel on
//! large screens and the form column.

use leptos::prelude::*;

#[component]
pub fn AuthLayout(
    /// Headline on the branding panel.
    headline: &'static str,
    /// Tagline under the headline.
    tagline: &'static str,
    /// Form column title.
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col lg:flex-row bg-gray-50">
            <div class="hidden lg:flex lg:w-1/2 bg-gradient-to-br from-emerald-600 via-teal-600 to-cyan-500 justify-center items-center p-12">
                <div class="text-white text-center max-w-lg">
                    <span class="material-symbols-outlined text-6xl mb-6">
                        "account_balance_wallet"
                    </span>
                    <h1 class="text-5xl font-bold mb-6 leading-tight">{headline}</h1>
                    <div class="w-20 h-1 bg-white mx-auto rounded-full mb-8"></div>
                    <p class="text-xl font-light leading-relaxed">{tagline}</p>
                </div>
            </div>
            <div class="flex-1 flex items-center justify-center p-6 lg:p-12">
                <div class="w-full max-w-md">
                    <div class="text-center mb-8">
                        <h2 class="text-3xl font-bold text-gray-900 mb-2">{title}</h2>
                        <p class="text-gray-600">{subtitle}</p>
                    </div>
                    {children()}
                </div>
            </div>
        </div>
    }
}
