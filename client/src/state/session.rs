//! One uploaded image with its gallery and the parameters it was filtered with.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::error::ClientError;
use crate::net::types::SourceFile;
use crate::state::gallery::{FilterGallery, ImageMetadata, UploadPayload};
use crate::state::params::FilterParameters;

/// An image the user is working on.
///
/// The source file is kept so parameter changes can re-upload it; it is shared
/// because batch entries and the viewer may hold the same session.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSession {
    pub source: Arc<SourceFile>,
    pub gallery: FilterGallery,
    pub parameters: FilterParameters,
}

impl ImageSession {
    /// # Errors
    ///
    /// Fails when the payload has no `original` variant.
    pub fn new(
        source: Arc<SourceFile>,
        payload: UploadPayload,
        parameters: FilterParameters,
    ) -> Result<Self, ClientError> {
        Ok(Self { source, gallery: FilterGallery::from_payload(payload)?, parameters })
    }

    #[must_use]
    pub fn metadata(&self) -> &ImageMetadata {
        self.gallery.metadata()
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.source.name
    }

    /// Replace the gallery with a regenerated one; the display returns to `original`.
    ///
    /// # Errors
    ///
    /// Fails when the payload has no `original` variant; the session is left unchanged.
    pub fn regenerate(&mut self, payload: UploadPayload, parameters: FilterParameters) -> Result<(), ClientError> {
        self.gallery = FilterGallery::from_payload(payload)?;
        self.parameters = parameters;
        Ok(())
    }
}
