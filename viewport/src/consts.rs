//! Shared numeric constants for the viewport crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Zoom change applied by one zoom-in / zoom-out step.
pub const ZOOM_STEP: f64 = 0.1;

/// Smallest zoom factor the viewport accepts.
pub const MIN_ZOOM: f64 = 0.5;

/// Largest zoom factor the viewport accepts.
pub const MAX_ZOOM: f64 = 3.0;

/// Tolerance used when comparing zoom against its limits.
pub const ZOOM_EPSILON: f64 = 1e-9;

// ── Export ──────────────────────────────────────────────────────

/// JPEG quality for zoomed crop exports (0.95 on the browser canvas scale).
pub const EXPORT_JPEG_QUALITY: u8 = 95;

/// Image source shown when nothing is loaded; export is suppressed for it.
pub const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder.svg";
