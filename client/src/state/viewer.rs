//! State behind the single-image viewer.
//!
//! DESIGN
//! ======
//! `ViewerState` owns the viewport engine, the current session, the parameter
//! panel values, the active-filter notice, and the request bookkeeping. Async
//! flows split every request into `begin_*` (before the await) and `finish_*`
//! (after), so the state can live inside a signal and never be borrowed across
//! an await point.
//!
//! Loading is a counter rather than a flag: every finished request decrements
//! it whether its response was applied, discarded as stale, or failed.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use std::sync::Arc;

use viewport::consts::PLACEHOLDER_IMAGE;
use viewport::engine::ViewportCore;
use viewport::geom::Size;
use viewport::mapper::ExportPlan;
use viewport::raster;

use crate::error::{ClientError, upload_alert};
use crate::net::api::DownloadRequest;
use crate::net::types::{SourceFile, UploadResponse};
use crate::render::{RenderInstructions, render_state};
use crate::state::gallery::FilterVariant;
use crate::state::notice::{NoticeTicket, TransientNotice};
use crate::state::params::FilterParameters;
use crate::state::sequence::{RequestSequencer, RequestTicket};
use crate::state::session::ImageSession;

/// What happened to a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Applied,
    /// A newer request was already applied; the response was dropped.
    Stale,
    Failed(ClientError),
}

/// Everything a parameter re-upload needs once the state lock is released.
#[derive(Debug, Clone, PartialEq)]
pub struct RegenerateRequest {
    pub ticket: RequestTicket,
    pub source: Arc<SourceFile>,
    pub parameters: FilterParameters,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    pub viewport: ViewportCore,
    pub session: Option<ImageSession>,
    /// Values shown in the parameter panel; sent with the next regeneration.
    pub parameters: FilterParameters,
    pub notice: TransientNotice,
    pub sequencer: RequestSequencer,
    /// Blocking error message from the last single-image upload.
    pub alert: Option<String>,
    in_flight: u32,
}

impl ViewerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.session.is_some()
    }

    // --- Single-image upload ---

    /// Record a file that failed client-side validation.
    pub fn reject_upload(&mut self, err: ClientError) -> UploadOutcome {
        log::warn!("upload rejected before sending: {err}");
        self.alert = Some(upload_alert(&err));
        UploadOutcome::Failed(err)
    }

    pub fn begin_upload(&mut self) -> RequestTicket {
        self.in_flight += 1;
        self.alert = None;
        self.sequencer.issue()
    }

    /// Apply the response to an upload started with [`Self::begin_upload`].
    pub fn finish_upload(
        &mut self,
        ticket: RequestTicket,
        source: Arc<SourceFile>,
        result: Result<UploadResponse, ClientError>,
    ) -> UploadOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);
        if !self.sequencer.accept(ticket) {
            log::debug!("discarding stale upload response #{}", ticket.seq());
            return UploadOutcome::Stale;
        }
        let session = result
            .and_then(UploadResponse::into_payload)
            .and_then(|payload| ImageSession::new(source, payload, self.parameters));
        match session {
            Ok(session) => {
                log::info!("loaded {} with {} filters", session.file_name(), session.gallery.variants().len());
                self.install_session(session);
                UploadOutcome::Applied
            }
            Err(err) => {
                log::error!("upload failed: {err}");
                self.alert = Some(upload_alert(&err));
                UploadOutcome::Failed(err)
            }
        }
    }

    // --- Parameter regeneration ---

    /// Start re-uploading the current image with the panel parameters.
    ///
    /// `None` when no image is loaded; nothing is sent in that case.
    pub fn begin_regenerate(&mut self) -> Option<RegenerateRequest> {
        let source = Arc::clone(&self.session.as_ref()?.source);
        self.in_flight += 1;
        Some(RegenerateRequest { ticket: self.sequencer.issue(), source, parameters: self.parameters })
    }

    /// Apply a regeneration response. Failures are logged, never alerted.
    pub fn finish_regenerate(
        &mut self,
        request: &RegenerateRequest,
        result: Result<UploadResponse, ClientError>,
    ) -> UploadOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);
        if !self.sequencer.accept(request.ticket) {
            log::debug!("discarding stale regeneration #{}", request.ticket.seq());
            return UploadOutcome::Stale;
        }
        let Some(session) = self.session.as_mut() else {
            return UploadOutcome::Stale;
        };
        if !Arc::ptr_eq(&session.source, &request.source) {
            return UploadOutcome::Stale;
        }
        match result.and_then(UploadResponse::into_payload) {
            Ok(payload) => match session.regenerate(payload, request.parameters) {
                Ok(()) => {
                    self.notice.clear();
                    UploadOutcome::Applied
                }
                Err(err) => {
                    log::error!("error updating filters: {err}");
                    UploadOutcome::Failed(err)
                }
            },
            Err(err) => {
                log::error!("error updating filters: {err}");
                UploadOutcome::Failed(err)
            }
        }
    }

    // --- Session management ---

    /// Show `session` (e.g. an opened batch entry) in the viewer, resetting the viewport.
    ///
    /// Uploads and regenerations still in flight were started for the previous
    /// image; their responses are discarded.
    pub fn activate_session(&mut self, session: ImageSession) {
        self.sequencer.invalidate();
        self.install_session(session);
    }

    fn install_session(&mut self, session: ImageSession) {
        self.viewport.load_image(session.metadata().natural_size());
        self.parameters = session.parameters;
        self.session = Some(session);
        self.notice.clear();
    }

    /// Return to the placeholder state. Panel parameters are kept.
    pub fn clear(&mut self) {
        self.session = None;
        self.alert = None;
        self.notice.clear();
        self.sequencer.invalidate();
        self.viewport.unload();
    }

    pub fn set_container(&mut self, container: Size) {
        self.viewport.set_container(container);
    }

    // --- Gallery ---

    /// Show `name` in the main display and announce it.
    ///
    /// # Errors
    ///
    /// [`ClientError::NoImage`] without a session, [`ClientError::UnknownVariant`] for
    /// names not in the gallery.
    pub fn select_variant(&mut self, name: &str) -> Result<NoticeTicket, ClientError> {
        let session = self.session.as_mut().ok_or(ClientError::NoImage)?;
        let FilterVariant { display_name, .. } = session.gallery.select_variant(name)?;
        let text = format!("Active Filter: {display_name}");
        Ok(self.notice.show(text))
    }

    /// # Errors
    ///
    /// [`ClientError::NoImage`] without a session, or the gallery's lookup error.
    pub fn download_request(&self, name: &str) -> Result<DownloadRequest, ClientError> {
        self.session.as_ref().ok_or(ClientError::NoImage)?.gallery.download_request(name)
    }

    /// Crop plan for the visible region; `None` in the placeholder state.
    #[must_use]
    pub fn export_plan(&self) -> Option<ExportPlan> {
        if self.main_image() == PLACEHOLDER_IMAGE {
            return None;
        }
        self.viewport.export_plan()
    }

    /// Rasterize the visible region of the displayed variant.
    ///
    /// `Ok(None)` in the placeholder state: there is nothing to export and no
    /// request should be made.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Export`] when the displayed image cannot be decoded or encoded.
    pub fn export_request(&self) -> Result<Option<DownloadRequest>, ClientError> {
        let Some(plan) = self.export_plan() else {
            return Ok(None);
        };
        let uri = raster::render_crop_data_uri(self.main_image(), &plan)?;
        Ok(Some(DownloadRequest::zoomed(uri)))
    }

    #[must_use]
    pub fn main_image(&self) -> &str {
        self.session.as_ref().map_or(PLACEHOLDER_IMAGE, |s| s.gallery.main_display())
    }

    #[must_use]
    pub fn render(&self) -> RenderInstructions {
        render_state(&self.viewport, self.session.as_ref().map(|s| &s.gallery), self.notice.text())
    }
}
