//! Client error type.
//!
//! Every fallible operation in the crate returns [`ClientError`]. Variants
//! carry plain strings so errors can be cloned into reactive state and compared
//! in tests.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use viewport::raster::RasterError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with HTTP {status}")]
    Http { status: u16 },
    /// Error message reported by the server in an upload response.
    #[error("{0}")]
    Server(String),
    #[error("server did not accept the upload")]
    Rejected,
    #[error("invalid server response: {0}")]
    Decode(String),
    #[error("response does not include the original image")]
    MissingOriginal,
    #[error("unknown filter: {0}")]
    UnknownVariant(String),
    #[error("no image loaded")]
    NoImage,
    #[error("export failed: {0}")]
    Export(String),
    #[error("{name} is not an image ({mime})")]
    NotAnImage { name: String, mime: String },
    #[error("file type not allowed: {name}")]
    UnsupportedType { name: String },
    #[error("{name} is larger than {limit} bytes")]
    TooLarge { name: String, limit: usize },
    #[error("invalid value for {field}: {raw}")]
    InvalidParameter { field: &'static str, raw: String },
    #[error("only available in the browser")]
    Unavailable,
}

impl From<RasterError> for ClientError {
    fn from(err: RasterError) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Text shown in the alert after a failed single-image upload.
#[must_use]
pub fn upload_alert(err: &ClientError) -> String {
    format!("Error processing image: {err}")
}
