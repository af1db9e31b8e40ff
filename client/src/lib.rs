//! Browser client for the image filter service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The filter server receives uploads and answers with every filter variant as
//! an encoded image. This crate owns everything on the browser side of that
//! exchange:
//!
//! | Module       | Responsibility                                              |
//! |--------------|-------------------------------------------------------------|
//! | `net`        | Wire types, endpoint paths, the `FilterService` seam        |
//! | `state`      | Gallery, session, batch, notice and viewer state            |
//! | `render`     | Pure projection of state into DOM-ready instructions        |
//! | `actions`    | Async flows that combine state with a `FilterService`       |
//! | `app`        | Leptos root, mounted only with the `csr` feature            |
//! | `components` | Leptos views (upload zone, viewer, grids, modal)            |
//! | `util`       | Browser glue: file reading, blob saving, timers             |
//!
//! Viewport math lives in the `viewport` crate; `state::viewer` owns one
//! `ViewportCore` per page.

pub mod actions;
pub mod error;
pub mod net;
pub mod render;
pub mod state;

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
pub mod components;
#[cfg(feature = "csr")]
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already initialised".into());
    }
    leptos::mount::mount_to_body(app::App);
}
