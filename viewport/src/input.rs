//! Input model: mouse buttons, wheel deltas, cursors, and the drag state machine.
//!
//! `DragState` is the gesture tracked between pointer-down and pointer-up. The drag stores a
//! start reference (`pointer - pan` at press time) so each move assigns an absolute pan rather
//! than accumulating deltas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
    /// Back, forward and any other auxiliary button. Never starts a drag.
    Other,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Other,
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Which way a wheel event moves the zoom. Magnitude is ignored: one step per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelZoom {
    In,
    Out,
}

impl WheelDelta {
    /// Negative vertical delta zooms in; zero or positive zooms out.
    #[must_use]
    pub fn direction(self) -> WheelZoom {
        if self.dy < 0.0 { WheelZoom::In } else { WheelZoom::Out }
    }
}

/// Pointer cursor the host should show over the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Zoomed in and ready to drag.
    Move,
    /// A drag is in progress.
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Move => "move",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Drag gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the zoomed image.
    Dragging {
        /// `pointer - pan` captured at pointer-down.
        start: Point,
    },
}

impl DragState {
    /// Begin a drag anchored so that the current `pan` stays put under `pointer`.
    #[must_use]
    pub fn begin(pointer: Point, pan: Point) -> Self {
        Self::Dragging { start: pointer.sub(pan) }
    }

    /// The pan a pointer at `pointer` asks for, or `None` when not dragging.
    #[must_use]
    pub fn target_pan(&self, pointer: Point) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { start } => Some(pointer.sub(*start)),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
