//! `reqwest`-backed [`FilterService`] for native runs.

use async_trait::async_trait;
use client::error::ClientError;
use client::net::api::{DownloadRequest, UPLOAD_PATH};
use client::net::service::FilterService;
use client::net::types::{SourceFile, UploadResponse};
use client::state::params::FilterParameters;
use reqwest::multipart::{Form, Part};

use crate::CliError;
use crate::config::ServiceConfig;

pub struct ReqwestFilterService {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl ReqwestFilterService {
    /// # Errors
    ///
    /// Returns [`CliError::Http`] when the HTTP client cannot be built.
    pub fn new(config: ServiceConfig) -> Result<Self, CliError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()?;
        Ok(Self { http, config })
    }
}

fn network_error(err: reqwest::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

#[async_trait(?Send)]
impl FilterService for ReqwestFilterService {
    async fn upload(
        &self,
        file: &SourceFile,
        parameters: Option<&FilterParameters>,
    ) -> Result<UploadResponse, ClientError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .map_err(network_error)?;
        let mut form = Form::new().part("file", part);
        if let Some(parameters) = parameters {
            for (field, value) in parameters.form_fields() {
                form = form.text(field, value);
            }
        }

        let url = self.config.endpoint(UPLOAD_PATH);
        tracing::debug!(%url, file = %file.name, bytes = file.bytes.len(), "uploading");
        let response = self.http.post(url).multipart(form).send().await.map_err(network_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(network_error)?;
        match serde_json::from_slice::<UploadResponse>(&body) {
            Ok(decoded) => Ok(decoded),
            Err(_) if !status.is_success() => Err(ClientError::Http { status: status.as_u16() }),
            Err(err) => Err(err.into()),
        }
    }

    async fn download(&self, request: &DownloadRequest) -> Result<Vec<u8>, ClientError> {
        let url = self.config.endpoint(&request.endpoint);
        tracing::debug!(%url, "downloading");
        let response = self
            .http
            .post(url)
            .json(&request.body())
            .send()
            .await
            .map_err(network_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Http { status: status.as_u16() });
        }
        let bytes = response.bytes().await.map_err(network_error)?;
        Ok(bytes.to_vec())
    }
}
