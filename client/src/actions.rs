//! Async flows that tie viewer state to a [`FilterService`].
//!
//! These take the state by `&mut` for the whole flow, which suits the CLI and
//! tests. The browser UI runs the same `begin_*`/`finish_*` steps against its
//! signals instead, so nothing is borrowed across an await there.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::sync::Arc;

use crate::error::ClientError;
use crate::net::api::DownloadRequest;
use crate::net::service::FilterService;
use crate::net::types::SourceFile;
use crate::state::viewer::{UploadOutcome, ViewerState};

/// Bytes returned by a download endpoint and the name to save them under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Validate and upload one image, then show its gallery.
///
/// The first upload of a session is sent without parameter fields so the
/// server applies its own defaults.
pub async fn process_image<S>(viewer: &mut ViewerState, service: &S, file: SourceFile) -> UploadOutcome
where
    S: FilterService + ?Sized,
{
    if let Err(err) = file.validate() {
        return viewer.reject_upload(err);
    }
    let ticket = viewer.begin_upload();
    let file = Arc::new(file);
    let result = service.upload(&file, None).await;
    viewer.finish_upload(ticket, file, result)
}

/// Re-upload the current image with the panel parameters.
///
/// `None` when no image is loaded.
pub async fn update_filter_parameters<S>(viewer: &mut ViewerState, service: &S) -> Option<UploadOutcome>
where
    S: FilterService + ?Sized,
{
    let request = viewer.begin_regenerate()?;
    let result = service.upload(&request.source, Some(&request.parameters)).await;
    Some(viewer.finish_regenerate(&request, result))
}

/// Download one filter variant as `filtered_image_<name>.jpg`.
///
/// # Errors
///
/// Fails without a loaded image, for unknown names, or when the request fails.
pub async fn download_variant<S>(viewer: &ViewerState, service: &S, name: &str) -> Result<SavedImage, ClientError>
where
    S: FilterService + ?Sized,
{
    let request = viewer.download_request(name)?;
    fetch(service, &request).await
}

/// Export the visible region as `zoomed_image.jpg`.
///
/// `Ok(None)` in the placeholder state, in which case no request is made.
///
/// # Errors
///
/// Fails when rasterizing or the download request fails.
pub async fn save_zoomed_image<S>(viewer: &ViewerState, service: &S) -> Result<Option<SavedImage>, ClientError>
where
    S: FilterService + ?Sized,
{
    let Some(request) = viewer.export_request()? else {
        log::debug!("export skipped: no image loaded");
        return Ok(None);
    };
    fetch(service, &request).await.map(Some)
}

/// Run one download request.
///
/// # Errors
///
/// Propagates the service error.
pub async fn fetch<S>(service: &S, request: &DownloadRequest) -> Result<SavedImage, ClientError>
where
    S: FilterService + ?Sized,
{
    let bytes = service.download(request).await?;
    log::info!("downloaded {} ({} bytes)", request.file_name, bytes.len());
    Ok(SavedImage { file_name: request.file_name.clone(), bytes })
}
