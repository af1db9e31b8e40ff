//! Browser glue shared by the Leptos components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here touches `web_sys` or spawns browser tasks, so the module
//! is only compiled with the `csr` feature. State rules stay in
//! `crate::state`; these helpers only move data between the DOM and it.

pub mod browser;
pub mod flows;
pub mod notice_timer;
