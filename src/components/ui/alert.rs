//! Inline banners for request failures and page notices. The message is shown
//! as text; it must never contain a password or a token.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Info,
}

impl AlertKind {
    fn icon(self) -> &'static str {
        match self {
            AlertKind::Error => "error",
            AlertKind::Info => "info",
        }
    }

    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "border-red-200 bg-red-50 text-red-700",
            AlertKind::Info => "border-emerald-200 bg-emerald-50 text-emerald-700",
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    let class = format!(
        "flex items-start gap-2 rounded-lg border px-4 py-3 text-sm {}",
        kind.class()
    );
    // Errors interrupt screen readers; notices wait their turn.
    let live = if kind == AlertKind::Error { "assertive" } else { "polite" };

    view! {
        <div class=class role="alert" aria-live=live>
            <span class="material-symbols-outlined text-base">{kind.icon()}</span>
            <span>{message}</span>
        </div>
    }
}
