//! Labeled text input with a leading icon, an inline error, and an optional
//! show/hide toggle for passwords.

use crate::app_lib::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn Field(
    id: &'static str,
    label: &'static str,
    /// Input type when not revealing a password, e.g. `text`, `email`, `password`.
    input_type: &'static str,
    /// Material symbol name for the leading icon.
    icon: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autocomplete: &'static str,
    #[prop(optional, into)] error: MaybeProp<String>,
    /// Called after every edit, typically to clear this field's error.
    #[prop(optional, into)]
    on_edit: Option<Callback<()>>,
    #[prop(optional)] revealable: bool,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let (revealed, set_revealed) = signal(false);
    let current_type = move || {
        if revealable && revealed.get() {
            "text"
        } else {
            input_type
        }
    };
    let input_class = move || {
        let state = if error.get().is_some() {
            Theme::INPUT_ERROR
        } else {
            Theme::INPUT_OK
        };
        format!("{} {state}", Theme::INPUT)
    };

    view! {
        <div class="space-y-2">
            <label class=Theme::LABEL for=id>
                {label}
            </label>
            <div class="relative">
                <span class=Theme::INPUT_ICON>{icon}</span>
                <input
                    id=id
                    name=id
                    type=current_type
                    class=input_class
                    placeholder=placeholder
                    autocomplete=autocomplete
                    required=required
                    prop:value=move || value.get()
                    on:input=move |event| {
                        value.set(event_target_value(&event));
                        if let Some(on_edit) = on_edit {
                            on_edit.run(());
                        }
                    }
                />
                <Show when=move || revealable>
                    <div class="absolute inset-y-0 right-0 pr-3 flex items-center">
                        <button
                            type="button"
                            class="text-gray-400 hover:text-gray-600 focus:outline-none"
                            aria-label="Toggle password visibility"
                            on:click=move |_| set_revealed.update(|shown| *shown = !*shown)
                        >
                            <span class="material-symbols-outlined">
                                {move || if revealed.get() { "visibility_off" } else { "visibility" }}
                            </span>
                        </button>
                    </div>
                </Show>
            </div>
            {move || error.get().map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })}
        </div>
    }
}
