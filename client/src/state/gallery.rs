//! Filter variants returned for one upload, and which one is on display.
//!
//! DESIGN
//! ======
//! Variants keep the order the server sent them in; the grid renders them in
//! that order. The `original` variant must always be present since it is the
//! initial selection and the fallback after regeneration.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use serde::Serialize;
use viewport::geom::Size;

use crate::error::ClientError;
use crate::net::api::DownloadRequest;

/// Name of the unfiltered variant.
pub const ORIGINAL: &str = "original";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterVariant {
    /// Server identifier, e.g. `"sepia"` or `"noise_reduction"`.
    pub name: String,
    /// Human label: the name with its first letter capitalised.
    pub display_name: String,
    /// Displayable data URI.
    pub encoded_image: String,
}

impl FilterVariant {
    pub fn new(name: impl Into<String>, encoded_image: impl Into<String>) -> Self {
        let name = name.into();
        Self { display_name: display_name(&name), name, encoded_image: encoded_image.into() }
    }
}

/// `"sepia"` becomes `"Sepia"`; the rest of the name is kept as is.
#[must_use]
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Facts about the uploaded image, as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageMetadata {
    /// Container format such as `"JPEG"`; unknown for some sources.
    pub format: Option<String>,
    pub width: u32,
    pub height: u32,
    /// Color mode such as `"RGB"` or `"L"`.
    pub color_mode: String,
}

impl ImageMetadata {
    /// `"800x600"`.
    #[must_use]
    pub fn size_text(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    #[must_use]
    pub fn natural_size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Lines for the metadata panel.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Format: {}", self.format.as_deref().unwrap_or("Unknown")),
            format!("Size: {}", self.size_text()),
            format!("Mode: {}", self.color_mode),
        ]
    }
}

/// Decoded upload response, before it becomes a gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    pub metadata: ImageMetadata,
    pub variants: Vec<FilterVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGallery {
    variants: Vec<FilterVariant>,
    active: usize,
    metadata: ImageMetadata,
}

impl FilterGallery {
    /// Build a gallery with `original` on display.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingOriginal`] when the payload has no `original` variant.
    pub fn from_payload(payload: UploadPayload) -> Result<Self, ClientError> {
        let active = payload
            .variants
            .iter()
            .position(|v| v.name == ORIGINAL)
            .ok_or(ClientError::MissingOriginal)?;
        Ok(Self { variants: payload.variants, active, metadata: payload.metadata })
    }

    #[must_use]
    pub fn variants(&self) -> &[FilterVariant] {
        &self.variants
    }

    #[must_use]
    pub fn metadata(&self) -> &ImageMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&FilterVariant> {
        self.variants.iter().find(|v| v.name == name)
    }

    #[must_use]
    pub fn active(&self) -> &FilterVariant {
        &self.variants[self.active]
    }

    #[must_use]
    pub fn active_name(&self) -> &str {
        &self.active().name
    }

    /// Image source for the main display.
    #[must_use]
    pub fn main_display(&self) -> &str {
        &self.active().encoded_image
    }

    /// Show `name` in the main display.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownVariant`] and leaves the selection unchanged when `name`
    /// is not in the gallery.
    pub fn select_variant(&mut self, name: &str) -> Result<&FilterVariant, ClientError> {
        let index = self
            .variants
            .iter()
            .position(|v| v.name == name)
            .ok_or_else(|| ClientError::UnknownVariant(name.to_owned()))?;
        self.active = index;
        Ok(&self.variants[index])
    }

    /// Request that downloads `name` as `filtered_image_<name>.jpg`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownVariant`] when `name` is not in the gallery.
    pub fn download_request(&self, name: &str) -> Result<DownloadRequest, ClientError> {
        let variant = self.variant(name).ok_or_else(|| ClientError::UnknownVariant(name.to_owned()))?;
        Ok(DownloadRequest::filter(&variant.name, &variant.encoded_image))
    }

    /// Thumbnail source for batch cards.
    #[must_use]
    pub fn original(&self) -> Option<&FilterVariant> {
        self.variant(ORIGINAL)
    }
}
