//! Zoom/pan viewport engine for the filter studio image viewer.
//!
//! The crate has no browser dependencies. The host (the Leptos client, or the CLI) measures the
//! container, feeds pointer and wheel events to [`engine::ViewportCore`], and re-reads its
//! render description. Crop export runs through [`mapper`] and [`raster`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | `ViewportCore`: input handling, render description, export plan |
//! | [`transform`] | Zoom steps, pan clamping, `compute_bounds` |
//! | [`mapper`] | Visible region → source-pixel rectangle |
//! | [`raster`] | Data URI decoding, crop rendering, JPEG encoding |
//! | [`input`] | Buttons, wheel deltas, cursors, drag state machine |
//! | [`geom`] | `Point` and `Size` |
//! | [`consts`] | Zoom limits, export quality, placeholder path |

pub mod consts;
pub mod engine;
pub mod geom;
pub mod input;
pub mod mapper;
pub mod raster;
pub mod transform;
