//! Mapping between container space and source-image pixel space.
//!
//! Used by crop export: given the viewport state and the image's natural size, find the source
//! rectangle that corresponds to what is currently visible in the container.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use crate::consts::EXPORT_JPEG_QUALITY;
use crate::geom::Size;
use crate::transform::{ViewportState, ViewportTransform};

/// Rectangle in source-image pixels. May extend past the image edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything the rasterizer needs to produce a zoomed crop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportPlan {
    pub source: SourceRect,
    pub output_width: u32,
    pub output_height: u32,
    pub quality: u8,
}

/// Turns one viewport snapshot into source-image rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    state: ViewportState,
    natural: Size,
    rendered: Size,
}

impl CoordinateMapper {
    /// `rendered` is the on-screen image size at `state.zoom`.
    #[must_use]
    pub fn new(state: ViewportState, natural: Size, rendered: Size) -> Self {
        Self { state, natural, rendered }
    }

    #[must_use]
    pub fn from_transform(transform: &ViewportTransform, natural: Size) -> Self {
        Self::new(transform.state(), natural, transform.rendered())
    }

    /// Source pixels per unscaled layout pixel: `natural_width / (rendered_width / zoom)`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.natural.width / (self.rendered.width / self.state.zoom)
    }

    /// Source rectangle for an output surface of `output` pixels.
    #[must_use]
    pub fn source_rect(&self, output: Size) -> SourceRect {
        let scale = self.scale();
        let zoom = self.state.zoom;
        SourceRect {
            x: -self.state.pan_x * scale / zoom + (self.natural.width - output.width * scale) / 2.0,
            y: -self.state.pan_y * scale / zoom + (self.natural.height - output.height * scale) / 2.0,
            width: output.width * scale,
            height: output.height * scale,
        }
    }

    /// Export plan at the container's pixel resolution.
    ///
    /// `None` when any size involved is empty, since no meaningful crop exists.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn plan(&self, container: Size) -> Option<ExportPlan> {
        if self.natural.is_empty() || self.rendered.is_empty() || container.is_empty() {
            return None;
        }
        let output_width = container.width.round().max(1.0) as u32;
        let output_height = container.height.round().max(1.0) as u32;
        let output = Size::new(f64::from(output_width), f64::from(output_height));
        Some(ExportPlan {
            source: self.source_rect(output),
            output_width,
            output_height,
            quality: EXPORT_JPEG_QUALITY,
        })
    }
}
