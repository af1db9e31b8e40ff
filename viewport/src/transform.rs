//! Zoom level, pan offset and the bounds that keep the image inside its container.
//!
//! The host applies the transform as CSS `scale(zoom) translate(pan_x px, pan_y px)`. Because the
//! translation sits inside the scale, pan values are in pre-scale units: an on-screen shift of
//! `d` pixels corresponds to a pan of `d / zoom`. Bounds are expressed in the same units.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_EPSILON, ZOOM_STEP};
use crate::geom::{Point, Size};

/// Zoom factor plus pan offset.
///
/// Identity is `{zoom: 1, pan_x: 0, pan_y: 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl ViewportState {
    pub const IDENTITY: Self = Self { zoom: 1.0, pan_x: 0.0, pan_y: 0.0 };

    /// Whether the zoom is strictly above fit-to-view (the only state where dragging pans).
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom > 1.0 + ZOOM_EPSILON
    }

    #[must_use]
    pub fn pan(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Allowed pan range on each axis.
///
/// `max_x == -min_x` and `max_y == -min_y` always hold. When the rendered image is smaller than
/// the container on an axis, that axis is inverted (`min > max`) and clamping pins it to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    #[must_use]
    pub fn clamp_x(&self, x: f64) -> f64 {
        clamp_axis(x, self.min_x, self.max_x)
    }

    #[must_use]
    pub fn clamp_y(&self, y: f64) -> f64 {
        clamp_axis(y, self.min_y, self.max_y)
    }
}

fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if min <= max { value.clamp(min, max) } else { 0.0 }
}

/// Pan limits for an image rendered at `rendered` size inside `container` at `zoom`.
#[must_use]
pub fn compute_bounds(container: Size, rendered: Size, zoom: f64) -> Bounds {
    let min_x = (container.width - rendered.width) / 2.0 / zoom;
    let min_y = (container.height - rendered.height) / 2.0 / zoom;
    Bounds { min_x, max_x: -min_x, min_y, max_y: -min_y }
}

/// Snap a zoom value onto the step grid so repeated stepping never accumulates drift.
#[must_use]
pub fn snap_zoom(zoom: f64) -> f64 {
    let steps_per_unit = (1.0 / ZOOM_STEP).round();
    (zoom * steps_per_unit).round() / steps_per_unit
}

/// Viewport transform bound to a container and an image layout box.
///
/// `layout` is the image's untransformed box inside the container; the rendered size is
/// `layout * zoom`. Every mutation re-clamps the pan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportTransform {
    state: ViewportState,
    container: Size,
    layout: Size,
}

impl ViewportTransform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    #[must_use]
    pub fn layout(&self) -> Size {
        self.layout
    }

    /// On-screen size of the image at the current zoom.
    #[must_use]
    pub fn rendered(&self) -> Size {
        self.layout.scale(self.state.zoom)
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        compute_bounds(self.container, self.rendered(), self.state.zoom)
    }

    /// Replace the container and layout sizes without re-clamping.
    pub fn set_frame(&mut self, container: Size, layout: Size) {
        self.container = container;
        self.layout = layout;
    }

    /// Step the zoom up by [`ZOOM_STEP`]. Returns `false` at [`MAX_ZOOM`].
    pub fn zoom_in(&mut self) -> bool {
        if self.state.zoom >= MAX_ZOOM - ZOOM_EPSILON {
            return false;
        }
        self.apply_zoom(self.state.zoom + ZOOM_STEP)
    }

    /// Step the zoom down by [`ZOOM_STEP`]. Returns `false` at [`MIN_ZOOM`].
    pub fn zoom_out(&mut self) -> bool {
        if self.state.zoom <= MIN_ZOOM + ZOOM_EPSILON {
            return false;
        }
        self.apply_zoom(self.state.zoom - ZOOM_STEP)
    }

    /// Return to identity.
    pub fn reset(&mut self) {
        self.state = ViewportState::IDENTITY;
    }

    /// Assign the pan offset, then clamp it.
    ///
    /// Ignored (returns `false`) while the zoom is at or below 1 or when either coordinate is not
    /// finite.
    pub fn pan_to(&mut self, x: f64, y: f64) -> bool {
        if !self.state.is_zoomed() || !x.is_finite() || !y.is_finite() {
            return false;
        }
        self.state.pan_x = x;
        self.state.pan_y = y;
        self.clamp();
        true
    }

    /// Re-clamp the pan against the current bounds.
    pub fn clamp(&mut self) {
        let bounds = self.bounds();
        self.state.pan_x = bounds.clamp_x(self.state.pan_x);
        self.state.pan_y = bounds.clamp_y(self.state.pan_y);
    }

    fn apply_zoom(&mut self, target: f64) -> bool {
        let old = self.state.zoom;
        let new = snap_zoom(target).clamp(MIN_ZOOM, MAX_ZOOM);
        if (new - old).abs() < ZOOM_EPSILON {
            return false;
        }
        let ratio = new / old;
        self.state.zoom = new;
        self.state.pan_x *= ratio;
        self.state.pan_y *= ratio;
        self.clamp();
        true
    }
}
