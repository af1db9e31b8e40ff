//! Endpoint paths and the browser [`FilterService`].
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ClientError::Unavailable`], since a
//! `FormData` body only exists in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::service::FilterService;
use super::types::{DownloadBody, SourceFile, UploadResponse};
use crate::error::ClientError;
use crate::state::params::FilterParameters;

pub const UPLOAD_PATH: &str = "/upload";
pub const ZOOMED_DOWNLOAD_PATH: &str = "/download/zoomed";
pub const ZOOMED_FILE_NAME: &str = "zoomed_image.jpg";

#[must_use]
pub fn filter_download_path(name: &str) -> String {
    format!("/download/{name}")
}

#[must_use]
pub fn filter_file_name(name: &str) -> String {
    format!("filtered_image_{name}.jpg")
}

/// One download call: where to post, what to post, and how to save the reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRequest {
    pub endpoint: String,
    pub image_data: String,
    pub file_name: String,
}

impl DownloadRequest {
    #[must_use]
    pub fn filter(name: &str, image_data: &str) -> Self {
        Self {
            endpoint: filter_download_path(name),
            image_data: image_data.to_owned(),
            file_name: filter_file_name(name),
        }
    }

    #[must_use]
    pub fn zoomed(image_data: String) -> Self {
        Self { endpoint: ZOOMED_DOWNLOAD_PATH.to_owned(), image_data, file_name: ZOOMED_FILE_NAME.to_owned() }
    }

    #[must_use]
    pub fn body(&self) -> DownloadBody {
        DownloadBody { image_data: self.image_data.clone() }
    }
}

/// [`FilterService`] for the page's own origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFilterService;

#[async_trait(?Send)]
impl FilterService for BrowserFilterService {
    async fn upload(
        &self,
        file: &SourceFile,
        parameters: Option<&FilterParameters>,
    ) -> Result<UploadResponse, ClientError> {
        #[cfg(feature = "csr")]
        {
            let form = browser::upload_form(file, parameters)?;
            let resp = gloo_net::http::Request::post(UPLOAD_PATH)
                .body(form)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            let status = resp.status();
            match resp.json::<UploadResponse>().await {
                Ok(body) => Ok(body),
                Err(_) if !resp.ok() => Err(ClientError::Http { status }),
                Err(e) => Err(ClientError::Decode(e.to_string())),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (file, parameters);
            Err(ClientError::Unavailable)
        }
    }

    async fn download(&self, request: &DownloadRequest) -> Result<Vec<u8>, ClientError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&request.endpoint)
                .json(&request.body())
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            if !resp.ok() {
                return Err(ClientError::Http { status: resp.status() });
            }
            resp.binary().await.map_err(network_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ClientError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn network_error(err: gloo_net::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

#[cfg(feature = "csr")]
mod browser {
    use wasm_bindgen::JsValue;

    use crate::error::ClientError;
    use crate::net::types::SourceFile;
    use crate::state::params::FilterParameters;

    fn js_error(value: JsValue) -> ClientError {
        ClientError::Network(format!("{value:?}"))
    }

    /// Multipart body with the file under `file` and one field per parameter.
    pub(super) fn upload_form(
        file: &SourceFile,
        parameters: Option<&FilterParameters>,
    ) -> Result<web_sys::FormData, ClientError> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&file.mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
        form.append_with_blob_and_filename("file", &blob, &file.name)
            .map_err(js_error)?;
        if let Some(parameters) = parameters {
            for (field, value) in parameters.form_fields() {
                form.append_with_str(field, &value).map_err(js_error)?;
            }
        }
        Ok(form)
    }
}
