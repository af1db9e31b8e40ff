//! The async seam between client state and the filter server.
//!
//! `crate::net::api::BrowserFilterService` implements it with `gloo-net` in the
//! browser; the CLI implements it with `reqwest`; tests use a scripted double.

use async_trait::async_trait;

use super::api::DownloadRequest;
use super::types::{SourceFile, UploadResponse};
use crate::error::ClientError;
use crate::state::params::FilterParameters;

#[async_trait(?Send)]
pub trait FilterService {
    /// `POST /upload` as multipart: the file plus optional parameter fields.
    ///
    /// Returns the decoded body even when it carries a server error, so the
    /// caller can surface the server's message.
    async fn upload(
        &self,
        file: &SourceFile,
        parameters: Option<&FilterParameters>,
    ) -> Result<UploadResponse, ClientError>;

    /// `POST` the request's JSON body to its endpoint and return the JPEG bytes.
    async fn download(&self, request: &DownloadRequest) -> Result<Vec<u8>, ClientError>;
}
