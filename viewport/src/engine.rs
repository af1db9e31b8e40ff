use crate::geom::{Point, Size};
use crate::input::{Button, Cursor, DragState, WheelDelta, WheelZoom};
use crate::mapper::{CoordinateMapper, ExportPlan};
use crate::transform::{ViewportState, ViewportTransform};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Host-facing description of how the displayed image should be transformed.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportRender {
    /// CSS `transform` value, e.g. `scale(1.5) translate(10px, -4px)`.
    pub transform_css: String,
    /// Whether the `zoomed` class applies (zoom above 1).
    pub zoomed: bool,
    pub cursor: Cursor,
}

/// Viewport engine state: everything except the DOM.
///
/// The host feeds container measurements, the loaded image's natural size and raw input events;
/// the core keeps the transform clamped. Hosts re-read [`ViewportCore::render`] after each event;
/// handlers only report what the host has to act on itself (pointer capture, zoom limits).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportCore {
    pub transform: ViewportTransform,
    pub drag: DragState,
    natural: Option<Size>,
}

impl ViewportCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Show a new image of the given natural size. Resets the viewport to identity.
    ///
    /// An empty size is treated as "no image".
    pub fn load_image(&mut self, natural: Size) {
        self.natural = if natural.is_empty() { None } else { Some(natural) };
        self.drag = DragState::Idle;
        self.transform.reset();
        let container = self.transform.container();
        self.transform.set_frame(container, natural.fit_within(container));
    }

    /// Return to the placeholder state.
    pub fn unload(&mut self) {
        self.load_image(Size::default());
    }

    /// Update the container size after layout or a window resize.
    ///
    /// While zoomed in the pan is re-clamped against the new bounds.
    pub fn set_container(&mut self, container: Size) {
        let natural = self.natural.unwrap_or_default();
        self.transform.set_frame(container, natural.fit_within(container));
        if self.transform.state().is_zoomed() {
            self.transform.clamp();
        }
    }

    // --- Commands ---

    /// One zoom step in. Returns `false` at the limit.
    pub fn zoom_in(&mut self) -> bool {
        self.transform.zoom_in()
    }

    /// One zoom step out. Returns `false` at the limit.
    pub fn zoom_out(&mut self) -> bool {
        self.transform.zoom_out()
    }

    pub fn reset(&mut self) {
        self.transform.reset();
        self.drag = DragState::Idle;
    }

    // --- Input events ---

    /// Start a drag. Only the primary button drags, and only while zoomed in on a loaded image.
    ///
    /// Returns whether a drag started; the host captures the pointer in that case.
    pub fn on_pointer_down(&mut self, pointer: Point, button: Button) -> bool {
        let state = self.transform.state();
        if button != Button::Primary || !state.is_zoomed() || self.natural.is_none() {
            return false;
        }
        self.drag = DragState::begin(pointer, state.pan());
        true
    }

    /// Pan to follow the pointer. Returns whether the pan changed.
    pub fn on_pointer_move(&mut self, pointer: Point) -> bool {
        let Some(target) = self.drag.target_pan(pointer) else {
            return false;
        };
        let before = self.transform.state();
        self.transform.pan_to(target.x, target.y) && self.transform.state() != before
    }

    /// Finish a drag. The pan stays where the drag left it.
    pub fn on_pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    /// One zoom step per wheel event regardless of delta magnitude.
    pub fn on_wheel(&mut self, delta: WheelDelta) -> bool {
        match delta.direction() {
            WheelZoom::In => self.zoom_in(),
            WheelZoom::Out => self.zoom_out(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.transform.state()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.natural.is_some()
    }

    #[must_use]
    pub fn natural(&self) -> Option<Size> {
        self.natural
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        if self.drag.is_dragging() {
            Cursor::Grabbing
        } else if self.transform.state().is_zoomed() {
            Cursor::Move
        } else {
            Cursor::Default
        }
    }

    #[must_use]
    pub fn render(&self) -> ViewportRender {
        let state = self.transform.state();
        ViewportRender {
            transform_css: format!(
                "scale({}) translate({}px, {}px)",
                css_number(state.zoom),
                css_number(state.pan_x),
                css_number(state.pan_y)
            ),
            zoomed: state.is_zoomed(),
            cursor: self.cursor(),
        }
    }

    /// Crop plan for the visible region, or `None` in the placeholder state.
    #[must_use]
    pub fn export_plan(&self) -> Option<ExportPlan> {
        let natural = self.natural?;
        CoordinateMapper::from_transform(&self.transform, natural).plan(self.transform.container())
    }

}

/// Format a CSS number without a negative zero.
fn css_number(value: f64) -> f64 {
    value + 0.0
}
