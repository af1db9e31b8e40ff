//! Pure projection of viewer state into what the DOM should show.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos components read [`RenderInstructions`] instead of poking at the
//! engine and gallery directly, which keeps every display rule testable
//! without a browser.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use viewport::consts::PLACEHOLDER_IMAGE;
use viewport::engine::ViewportCore;

use crate::state::gallery::FilterGallery;

/// Shown in the metadata panel before any upload.
pub const EMPTY_METADATA_TEXT: &str = "Upload an image to see its details";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileInstruction {
    pub name: String,
    pub display_name: String,
    pub src: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderInstructions {
    pub main_image: String,
    /// CSS `transform` for the main image.
    pub transform_css: String,
    /// Whether the container gets the `zoomed` class.
    pub zoomed: bool,
    /// CSS cursor for the container.
    pub cursor: &'static str,
    pub tiles: Vec<TileInstruction>,
    /// Metadata panel lines; a single hint line without an image.
    pub metadata: Vec<String>,
    pub notice: Option<String>,
    pub export_enabled: bool,
}

#[must_use]
pub fn render_state(
    viewport: &ViewportCore,
    gallery: Option<&FilterGallery>,
    notice: Option<&str>,
) -> RenderInstructions {
    let view = viewport.render();
    let main_image = gallery.map_or(PLACEHOLDER_IMAGE, FilterGallery::main_display).to_owned();
    let tiles = gallery.map(gallery_tiles).unwrap_or_default();
    let metadata = gallery.map_or_else(|| vec![EMPTY_METADATA_TEXT.to_owned()], |g| g.metadata().lines());
    RenderInstructions {
        export_enabled: gallery.is_some() && viewport.has_image() && main_image != PLACEHOLDER_IMAGE,
        main_image,
        transform_css: view.transform_css,
        zoomed: view.zoomed,
        cursor: view.cursor.as_css(),
        tiles,
        metadata,
        notice: notice.map(str::to_owned),
    }
}

/// One tile per variant, in gallery order, with the active one marked.
#[must_use]
pub fn gallery_tiles(gallery: &FilterGallery) -> Vec<TileInstruction> {
    gallery
        .variants()
        .iter()
        .map(|v| TileInstruction {
            name: v.name.clone(),
            display_name: v.display_name.clone(),
            src: v.encoded_image.clone(),
            active: v.name == gallery.active_name(),
        })
        .collect()
}
