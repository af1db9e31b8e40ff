//! Browser versions of the `crate::actions` flows.
//!
//! Each flow updates the signal before the request, awaits the service with
//! no state borrowed, then applies the response in a second update.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::error::{ClientError, upload_alert};
use crate::net::api::{BrowserFilterService, DownloadRequest};
use crate::net::service::FilterService;
use crate::net::types::SourceFile;
use crate::state::batch::BatchSession;
use crate::state::viewer::{UploadOutcome, ViewerState};
use crate::util::browser::{self, read_file};
use crate::util::notice_timer;

/// Route picked or dropped files: one file goes to the viewer, several to the batch.
pub fn handle_files(viewer: RwSignal<ViewerState>, batch: RwSignal<BatchSession>, files: Vec<web_sys::File>) {
    match files.len() {
        0 => {}
        1 => spawn_local(async move {
            match read_file(&files[0]).await {
                Ok(file) => process_image(viewer, file).await,
                Err(err) => browser::alert(&upload_alert(&err)),
            }
        }),
        _ => spawn_local(process_batch(batch, files)),
    }
}

async fn process_image(viewer: RwSignal<ViewerState>, file: SourceFile) {
    if let Err(err) = file.validate() {
        viewer.update(|v| {
            v.reject_upload(err);
        });
        show_alert(viewer);
        return;
    }
    let Some(ticket) = viewer.try_update(ViewerState::begin_upload) else {
        return;
    };
    notice_timer::cancel();
    let file = Arc::new(file);
    let result = BrowserFilterService.upload(&file, None).await;
    let outcome = viewer.try_update(|v| v.finish_upload(ticket, file, result));
    if matches!(outcome, Some(UploadOutcome::Failed(_))) {
        show_alert(viewer);
    }
}

fn show_alert(viewer: RwSignal<ViewerState>) {
    if let Some(message) = viewer.with_untracked(|v| v.alert.clone()) {
        browser::alert(&message);
    }
}

async fn process_batch(batch: RwSignal<BatchSession>, files: Vec<web_sys::File>) {
    batch.update(BatchSession::begin);
    for handle in &files {
        let file = match read_file(handle).await {
            Ok(file) => file,
            Err(err) => {
                log::error!("batch: could not read {}: {err}", handle.name());
                continue;
            }
        };
        if !BatchSession::admits(&file) {
            continue;
        }
        let file = Arc::new(file);
        let result = BrowserFilterService.upload(&file, None).await;
        batch.update(|b| {
            b.record(file, result);
        });
    }
    batch.update(BatchSession::finish);
}

/// Re-upload the current image with the panel parameters.
pub fn regenerate(viewer: RwSignal<ViewerState>) {
    let Some(Some(request)) = viewer.try_update(ViewerState::begin_regenerate) else {
        return;
    };
    spawn_local(async move {
        let result = BrowserFilterService.upload(&request.source, Some(&request.parameters)).await;
        viewer.update(|v| {
            v.finish_regenerate(&request, result);
        });
    });
}

/// Select a variant and (re)start the notice timer.
pub fn select_variant(viewer: RwSignal<ViewerState>, name: &str) {
    match viewer.try_update(|v| v.select_variant(name)) {
        Some(Ok(ticket)) => notice_timer::schedule(viewer, ticket),
        Some(Err(err)) => log::warn!("select {name}: {err}"),
        None => {}
    }
}

/// Download one filter variant. Failures are alerted.
pub fn download_variant(viewer: RwSignal<ViewerState>, name: &str) {
    let request = match viewer.with_untracked(|v| v.download_request(name)) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("download {name}: {err}");
            return;
        }
    };
    download(request);
}

/// Fetch a filter download and save it. Failures are alerted.
pub fn download(request: DownloadRequest) {
    spawn_local(async move {
        if let Err(err) = fetch_and_save(&request).await {
            log::error!("error downloading {}: {err}", request.file_name);
            browser::alert(&format!("Error downloading image: {err}"));
        }
    });
}

/// Export the visible region of the main image. Does nothing without an image;
/// failures are only logged.
pub fn save_zoomed(viewer: RwSignal<ViewerState>) {
    let request = match viewer.with_untracked(ViewerState::export_request) {
        Ok(Some(request)) => request,
        Ok(None) => {
            log::debug!("export skipped: no image loaded");
            return;
        }
        Err(err) => {
            log::error!("error saving image: {err}");
            return;
        }
    };
    spawn_local(async move {
        if let Err(err) = fetch_and_save(&request).await {
            log::error!("error saving image: {err}");
        }
    });
}

async fn fetch_and_save(request: &DownloadRequest) -> Result<(), ClientError> {
    let saved = actions::fetch(&BrowserFilterService, request).await?;
    browser::save_image(&saved)
}
