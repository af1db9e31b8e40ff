//! Leptos view components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read state through `expect_context` signals provided by
//! `crate::app::App` and delegate every state change to `crate::state` or the
//! browser flows in `crate::util::flows`.

pub mod batch_grid;
pub mod filter_grid;
pub mod notice;
pub mod parameter_panel;
pub mod upload_zone;
pub mod viewer_panel;
