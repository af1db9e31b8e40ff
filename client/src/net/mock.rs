//! Scripted [`FilterService`] for state and action tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::api::DownloadRequest;
use super::service::FilterService;
use super::types::{SourceFile, UploadResponse};
use crate::error::ClientError;
use crate::state::params::FilterParameters;

/// Recorded upload call.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadCall {
    pub file_name: String,
    pub parameters: Option<FilterParameters>,
}

/// Replays queued responses in order and records every call.
#[derive(Default)]
pub struct ScriptedService {
    uploads: RefCell<VecDeque<Result<UploadResponse, ClientError>>>,
    downloads: RefCell<VecDeque<Result<Vec<u8>, ClientError>>>,
    pub upload_calls: RefCell<Vec<UploadCall>>,
    pub download_calls: RefCell<Vec<DownloadRequest>>,
}

impl ScriptedService {
    pub fn push_upload(&self, response: Result<UploadResponse, ClientError>) {
        self.uploads.borrow_mut().push_back(response);
    }

    pub fn push_download(&self, response: Result<Vec<u8>, ClientError>) {
        self.downloads.borrow_mut().push_back(response);
    }
}

#[async_trait(?Send)]
impl FilterService for ScriptedService {
    async fn upload(
        &self,
        file: &SourceFile,
        parameters: Option<&FilterParameters>,
    ) -> Result<UploadResponse, ClientError> {
        self.upload_calls
            .borrow_mut()
            .push(UploadCall { file_name: file.name.clone(), parameters: parameters.copied() });
        self.uploads
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no scripted upload".into())))
    }

    async fn download(&self, request: &DownloadRequest) -> Result<Vec<u8>, ClientError> {
        self.download_calls.borrow_mut().push(request.clone());
        self.downloads
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no scripted download".into())))
    }
}

/// Successful upload body with the given `(name, uri)` filters.
pub fn upload_ok(filters: &[(&str, &str)], width: u32, height: u32) -> UploadResponse {
    UploadResponse {
        success: true,
        error: None,
        metadata: Some(super::types::WireMetadata {
            format: Some("JPEG".into()),
            size: [width, height],
            mode: "RGB".into(),
        }),
        filters: filters
            .iter()
            .map(|(name, uri)| ((*name).to_owned(), serde_json::Value::String((*uri).to_owned())))
            .collect(),
    }
}

pub fn image_file(name: &str) -> SourceFile {
    SourceFile::new(name, "image/png", vec![1, 2, 3])
}
