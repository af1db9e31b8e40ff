//! Networking for the filter server's HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `service` the async seam that state flows
//! call through, and `api` the endpoint paths plus the browser implementation
//! backed by `gloo-net`.

pub mod api;
pub mod service;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
