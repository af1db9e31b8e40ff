//! Wire DTOs for the filter server and the file being uploaded.
//!
//! DESIGN
//! ======
//! The upload response is decoded loosely (every field defaulted) and then
//! validated in [`UploadResponse::into_payload`], so a malformed body turns
//! into a typed `ClientError` rather than a serde message.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ClientError;
use crate::state::gallery::{FilterVariant, ImageMetadata, UploadPayload};

/// Largest upload the server accepts.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Extensions the server accepts, lowercase.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Body of `POST /upload`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<WireMetadata>,
    /// Filter name to data URI, in server order.
    #[serde(default)]
    pub filters: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireMetadata {
    #[serde(default)]
    pub format: Option<String>,
    /// `[width, height]`.
    pub size: [u32; 2],
    #[serde(default)]
    pub mode: String,
}

impl UploadResponse {
    /// Validate the response and convert it into gallery input.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Server`] when the server reported an error.
    /// - [`ClientError::Rejected`] when `success` is false without a message.
    /// - [`ClientError::Decode`] for missing metadata or non-string filter entries.
    pub fn into_payload(self) -> Result<UploadPayload, ClientError> {
        if let Some(message) = self.error {
            return Err(ClientError::Server(message));
        }
        if !self.success {
            return Err(ClientError::Rejected);
        }
        let wire = self.metadata.ok_or_else(|| ClientError::Decode("missing metadata".into()))?;
        let variants = self
            .filters
            .into_iter()
            .map(|(name, value)| match value {
                Value::String(uri) => Ok(FilterVariant::new(name, uri)),
                other => Err(ClientError::Decode(format!("filter {name} is not a string: {other}"))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(UploadPayload {
            metadata: ImageMetadata {
                format: wire.format,
                width: wire.size[0],
                height: wire.size[1],
                color_mode: wire.mode,
            },
            variants,
        })
    }
}

/// Body of both download endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadBody {
    pub image_data: String,
}

/// A file picked or dropped by the user, read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    /// MIME type as reported by the browser; may be empty.
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), mime: mime.into(), bytes }
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// Lowercase extension after the last dot.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())
    }

    /// Check the file against the server's upload rules before sending it.
    ///
    /// # Errors
    ///
    /// Returns the first rule the file breaks: image MIME type, allowed extension, size limit.
    pub fn validate(&self) -> Result<(), ClientError> {
        if !self.is_image() {
            return Err(ClientError::NotAnImage { name: self.name.clone(), mime: self.mime.clone() });
        }
        let allowed = self.extension().is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()));
        if !allowed {
            return Err(ClientError::UnsupportedType { name: self.name.clone() });
        }
        if self.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(ClientError::TooLarge { name: self.name.clone(), limit: MAX_UPLOAD_BYTES });
        }
        Ok(())
    }
}
