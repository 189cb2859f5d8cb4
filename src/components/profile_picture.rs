//! Profile picture selector: click-to-browse or drag-and-drop, a circular
//! preview, and a remove button. Validation and decode sequencing live in
//! `features::profile_picture`; this component wires them to the DOM and to
//! the browser file reader.

use crate::features::profile_picture::{ImageCandidate, ImageIntake, Selection};
use leptos::{ev, html, prelude::*, task::spawn_local};
use web_sys::{File, FileList, HtmlInputElement};

const ZONE_BASE: &str = "relative w-32 h-32 rounded-full border-4 border-dashed transition-all duration-300 cursor-pointer group";

/// Shows a blocking notice, the same way the browser reports invalid input.
fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn files_of(list: Option<FileList>) -> impl Iterator<Item = File> {
    list.into_iter()
        .flat_map(|files| (0..files.length()).filter_map(move |index| files.get(index)))
}

/// Renders the selector. `on_image_select` receives `Selection::Chosen` once a
/// valid file has been decoded, or `Selection::Cleared` after removal; rejected
/// files never reach it. `error` is rendered as given; the selector never
/// produces one itself, and `required` is advisory only.
#[component]
pub fn ProfilePictureSelector(
    #[prop(into)] on_image_select: Callback<Selection<File>>,
    #[prop(optional)] current_image: Option<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let intake = RwSignal::new(ImageIntake::new(current_image));
    let preview = Memo::new(move |_| intake.with(|state| state.preview().map(str::to_string)));
    let input_ref = NodeRef::<html::Input>::new();

    let handle_file = move |file: File| {
        let candidate = ImageCandidate::new(file.type_(), file.size() as u64);
        let Some(outcome) = intake.try_update(|state| state.accept(&candidate)) else {
            return;
        };
        let ticket = match outcome {
            Ok(ticket) => ticket,
            Err(rejection) => {
                tracing::info!(
                    mime_type = %candidate.mime_type,
                    size = candidate.size,
                    %rejection,
                    "profile picture rejected"
                );
                notify(&rejection.to_string());
                return;
            }
        };

        spawn_local(async move {
            let blob = gloo_file::File::from(file.clone());
            match gloo_file::futures::read_as_data_url(&blob).await {
                Ok(data_uri) => {
                    let selection = intake
                        .try_update(|state| state.complete(ticket, file, data_uri))
                        .flatten();
                    if let Some(selection) = selection {
                        on_image_select.run(selection);
                    }
                }
                Err(err) => tracing::warn!(error = %err, "failed to read profile picture"),
            }
        });
    };

    let open_dialog = move || {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let remove_image = move |event: ev::MouseEvent| {
        event.stop_propagation();
        let selection = intake.try_update(|state| state.remove::<File>());
        if let Some(selection) = selection {
            on_image_select.run(selection);
        }
        // Reset so picking the same file again still fires `change`.
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
    };

    let on_change = move |event: ev::Event| {
        let input: HtmlInputElement = event_target(&event);
        if let Some(file) = files_of(input.files()).next() {
            handle_file(file);
        }
    };

    let on_drag_over = move |event: ev::DragEvent| {
        event.prevent_default();
        if !intake.with_untracked(ImageIntake::is_drag_over) {
            intake.update(ImageIntake::drag_over);
        }
    };

    let on_drag_leave = move |event: ev::DragEvent| {
        event.prevent_default();
        intake.update(ImageIntake::drag_leave);
    };

    let on_drop = move |event: ev::DragEvent| {
        event.prevent_default();
        let dropped = files_of(event.data_transfer().and_then(|transfer| transfer.files()));
        let first = intake.try_update(|state| state.drop_files(dropped)).flatten();
        if let Some(file) = first {
            handle_file(file);
        }
    };

    let zone_class = move || {
        let state = if intake.with(ImageIntake::is_drag_over) {
            "border-emerald-400 bg-emerald-50"
        } else if preview.with(Option::is_some) {
            "border-emerald-500 bg-white"
        } else if error.get().is_some() {
            "border-red-300 bg-red-50 hover:border-red-400"
        } else {
            "border-gray-300 bg-gray-50 hover:border-emerald-400 hover:bg-emerald-50"
        };
        format!("{ZONE_BASE} {state}")
    };

    view! {
        <div class="mb-7">
            <div class="flex flex-col items-center">
                <div
                    class=zone_class
                    role="button"
                    aria-label="Profile picture"
                    aria-required=required.to_string()
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                    on:click=move |_| open_dialog()
                >
                    {move || match preview.get() {
                        Some(src) => {
                            view! {
                                <img
                                    src=src
                                    alt="Profile preview"
                                    class="w-full h-full rounded-full object-cover"
                                />
                                <div class="absolute inset-0 bg-black/50 rounded-full opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center">
                                    <div class="text-white text-center">
                                        <span class="material-symbols-outlined block">
                                            "photo_camera"
                                        </span>
                                        <span class="text-xs">"Change"</span>
                                    </div>
                                </div>
                                <button
                                    type="button"
                                    class="absolute -top-2 -right-2 bg-red-500 hover:bg-red-600 text-white rounded-full p-1 shadow-lg"
                                    aria-label="Remove picture"
                                    on:click=remove_image
                                >
                                    <span class="material-symbols-outlined text-base">"close"</span>
                                </button>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <div class="flex flex-col items-center justify-center h-full text-gray-400 group-hover:text-emerald-500 transition-colors duration-300">
                                    <span class="material-symbols-outlined text-5xl mb-2">
                                        "person"
                                    </span>
                                    <div class="text-center px-2">
                                        <p class="text-xs font-medium">"Click to upload"</p>
                                        <p class="text-xs">"or drag & drop"</p>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
                <div class="mt-4 text-center">
                    <button
                        type="button"
                        class="inline-flex items-center px-4 py-2 bg-white border border-gray-300 rounded-lg text-sm font-medium text-gray-700 hover:bg-gray-50 hover:border-emerald-300"
                        on:click=move |_| open_dialog()
                    >
                        <span class="material-symbols-outlined text-base mr-2">"upload"</span>
                        "Choose Photo"
                    </button>
                    <p class="text-xs text-gray-500 mt-2">"PNG, JPG up to 5MB"</p>
                </div>
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! { <p class="text-red-500 text-xs mt-2 text-center">{message}</p> }
                        })
                }}
            </div>
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                class="hidden"
                on:change=on_change
            />
        </div>
    }
}
