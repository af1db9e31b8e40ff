//! Client-side state.
//!
//! DESIGN
//! ======
//! Everything here is plain data with synchronous methods. The Leptos layer
//! wraps the top-level values in `RwSignal`s; async flows in `crate::actions`
//! drive them through a `FilterService`.

pub mod batch;
pub mod gallery;
pub mod notice;
pub mod params;
pub mod sequence;
pub mod session;
pub mod viewer;
