//! Click-or-drop upload area.

use leptos::prelude::*;

use crate::state::batch::BatchSession;
use crate::state::viewer::ViewerState;
use crate::util::browser::files_from_list;
use crate::util::flows;

#[component]
pub fn UploadZone() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let batch = expect_context::<RwSignal<BatchSession>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let dragover = RwSignal::new(false);

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(list) = input.files() {
            flows::handle_files(viewer, batch, files_from_list(&list));
        }
        // Allow picking the same file again.
        input.set_value("");
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragover.set(true);
    };

    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragover.set(false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragover.set(false);
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            flows::handle_files(viewer, batch, files_from_list(&list));
        }
    };

    let loading = move || viewer.with(ViewerState::is_loading) || batch.with(BatchSession::is_loading);

    view! {
        <div
            class="upload-zone"
            class:dragover=move || dragover.get()
            on:click=on_click
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <p>"Drop images here or click to choose"</p>
            <p class="upload-zone__hint">"PNG, JPG or GIF, up to 16 MB. Several files start a batch."</p>
            <input
                type="file"
                accept="image/*"
                multiple=true
                class="upload-zone__input"
                node_ref=input_ref
                on:change=on_change
                on:click=|ev| ev.stop_propagation()
            />
            <Show when=loading>
                <div class="loading">"Processing…"</div>
            </Show>
        </div>
    }
}
