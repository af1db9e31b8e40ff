//! Main image viewer: zoom controls, drag-to-pan, wheel zoom, metadata.
//!
//! SYSTEM CONTEXT
//! ==============
//! The container div is the viewport: its client size is pushed into the
//! engine on mount and on every window resize, and the main image gets the
//! engine's CSS transform. All zoom/pan rules live in `viewport::engine`.

use leptos::prelude::*;
use viewport::geom::{Point, Size};
use viewport::engine::ViewportCore;
use viewport::input::{Button, WheelDelta};

use crate::render::RenderInstructions;
use crate::state::viewer::ViewerState;
use crate::util::flows;
use crate::util::notice_timer;

fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn measure(viewer: RwSignal<ViewerState>, container: &web_sys::HtmlDivElement) {
    let size = Size::new(f64::from(container.client_width()), f64::from(container.client_height()));
    viewer.update(|v| v.set_container(size));
}

fn zoom(viewer: RwSignal<ViewerState>, step: fn(&mut ViewportCore) -> bool) {
    if viewer.try_update(|v| step(&mut v.viewport)) == Some(false) {
        log::debug!("zoom limit reached");
    }
}

#[component]
pub fn ViewerPanel() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let render = Memo::new(move |_| viewer.with(ViewerState::render));

    Effect::new(move || {
        if let Some(container) = container_ref.get() {
            measure(viewer, &container);
        }
    });

    let resize = window_event_listener(leptos::ev::resize, move |_| {
        if let Some(container) = container_ref.get_untracked() {
            measure(viewer, &container);
        }
    });
    on_cleanup(move || resize.remove());

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        let button = Button::from_dom(ev.button());
        let point = pointer_point(&ev);
        let started = viewer.try_update(|v| v.viewport.on_pointer_down(point, button));
        if started == Some(true) {
            ev.prevent_default();
            if let Some(container) = container_ref.get_untracked() {
                if let Err(err) = container.set_pointer_capture(ev.pointer_id()) {
                    log::warn!("pointer capture failed: {err:?}");
                }
            }
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !viewer.with_untracked(|v| v.viewport.drag.is_dragging()) {
            return;
        }
        let point = pointer_point(&ev);
        // Clamped moves leave the transform as is; skip the re-render.
        viewer.maybe_update(|v| v.viewport.on_pointer_move(point));
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        viewer.update(|v| v.viewport.on_pointer_up());
    };

    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        if !viewer.with_untracked(ViewerState::has_image) {
            return;
        }
        ev.prevent_default();
        let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
        if viewer.try_update(|v| v.viewport.on_wheel(delta)) == Some(false) {
            log::debug!("zoom limit reached");
        }
    };

    let on_zoom_in = move |_| zoom(viewer, ViewportCore::zoom_in);
    let on_zoom_out = move |_| zoom(viewer, ViewportCore::zoom_out);
    let on_reset = move |_| viewer.update(|v| v.viewport.reset());
    let on_save = move |_| flows::save_zoomed(viewer);
    let on_clear = move |_| {
        notice_timer::cancel();
        viewer.update(ViewerState::clear);
    };

    let field = move |f: fn(&RenderInstructions) -> String| move || render.with(f);

    view! {
        <section class="viewer">
            <div
                class="image-container"
                class:zoomed=move || render.with(|r| r.zoomed)
                style:cursor=move || render.with(|r| r.cursor)
                node_ref=container_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_up
                on:wheel=on_wheel
            >
                <img
                    class="main-image"
                    alt="Main image"
                    draggable="false"
                    src=field(|r| r.main_image.clone())
                    style:transform=field(|r| r.transform_css.clone())
                />
            </div>

            <div class="viewer__controls">
                <button class="btn" on:click=on_zoom_in title="Zoom in">"+"</button>
                <button class="btn" on:click=on_zoom_out title="Zoom out">"−"</button>
                <button class="btn" on:click=on_reset title="Reset zoom">"Reset"</button>
                <button
                    class="btn"
                    on:click=on_save
                    disabled=move || !render.with(|r| r.export_enabled)
                    title="Save the visible region"
                >
                    "Save zoomed"
                </button>
                <button class="btn btn--danger" on:click=on_clear title="Remove image">"Clear"</button>
            </div>

            <ul class="metadata">
                <For
                    each=move || render.with(|r| r.metadata.clone())
                    key=|line| line.clone()
                    children=|line| view! { <li>{line}</li> }
                />
            </ul>
        </section>
    }
}
