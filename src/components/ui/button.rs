use super::Spinner;
use leptos::prelude::*;

/// Full-width primary action. While `busy` is set the button is disabled and
/// shows a spinner with `busy_label` instead of its children.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(into, default = Signal::from(false))] busy: Signal<bool>,
    #[prop(optional)] busy_label: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let busy_label = busy_label.unwrap_or("Processing...");

    view! {
        <button
            type=button_type
            class="w-full flex justify-center py-3 px-4 rounded-xl shadow-lg text-sm font-semibold text-white bg-gradient-to-r from-emerald-600 to-teal-600 hover:from-emerald-700 hover:to-teal-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-emerald-500 transition-all duration-200"
            class:cursor-not-allowed=move || busy.get()
            class:opacity-70=move || busy.get()
            disabled=move || busy.get()
        >
            {move || {
                if busy.get() {
                    view! {
                        <span class="flex items-center">
                            <Spinner />
                            <span class="ml-2">{busy_label}</span>
                        </span>
                    }
                        .into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}
