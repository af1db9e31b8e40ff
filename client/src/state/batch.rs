//! Multi-image batch: one session per successfully uploaded file.
//!
//! DESIGN
//! ======
//! Uploads run one at a time in selection order. Entries are only ever
//! appended, so card indices stay stable while a later batch is still
//! uploading. Opening a card focuses it and hands a copy of its session to
//! the viewer, which makes it the active image. Closing the modal stores the
//! viewer's session back into the entry while it is still that image.

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;

use std::sync::Arc;

use crate::error::ClientError;
use crate::net::service::FilterService;
use crate::net::types::{SourceFile, UploadResponse};
use crate::state::params::FilterParameters;
use crate::state::session::ImageSession;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchPhase {
    #[default]
    Idle,
    Uploading,
    /// At least one batch has finished; cards are on screen.
    Rendered,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub name: String,
    pub session: ImageSession,
}

/// One card in the batch grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCard {
    pub index: usize,
    pub name: String,
    /// The entry's `original` variant.
    pub thumbnail: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSession {
    entries: Vec<BatchEntry>,
    phase: BatchPhase,
    in_flight: u32,
    focused: Option<usize>,
}

impl BatchSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `file` should be uploaded. Non-images are skipped silently;
    /// other validation failures are logged.
    #[must_use]
    pub fn admits(file: &SourceFile) -> bool {
        if !file.is_image() {
            log::debug!("batch: skipping non-image {} ({})", file.name, file.mime);
            return false;
        }
        match file.validate() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("batch: skipping {}: {err}", file.name);
                false
            }
        }
    }

    pub fn begin(&mut self) {
        self.in_flight += 1;
        self.phase = BatchPhase::Uploading;
    }

    /// Record one upload result. Returns whether an entry was appended.
    pub fn record(&mut self, source: Arc<SourceFile>, result: Result<UploadResponse, ClientError>) -> bool {
        let name = source.name.clone();
        let session = result
            .and_then(UploadResponse::into_payload)
            .and_then(|payload| ImageSession::new(source, payload, FilterParameters::default()));
        match session {
            Ok(session) => {
                self.entries.push(BatchEntry { name, session });
                true
            }
            Err(err) => {
                log::error!("batch: error processing {name}: {err}");
                false
            }
        }
    }

    pub fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight == 0 {
            self.phase = BatchPhase::Rendered;
        }
    }

    /// Upload `files` sequentially and append every success. Returns the number appended.
    pub async fn process_files<S>(&mut self, service: &S, files: Vec<SourceFile>) -> usize
    where
        S: FilterService + ?Sized,
    {
        self.begin();
        let mut appended = 0;
        for file in files {
            if !Self::admits(&file) {
                continue;
            }
            let file = Arc::new(file);
            let result = service.upload(&file, None).await;
            if self.record(file, result) {
                appended += 1;
            }
        }
        self.finish();
        log::info!("batch: {appended} image(s) processed, {} total", self.entries.len());
        appended
    }

    #[must_use]
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn phase(&self) -> BatchPhase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    #[must_use]
    pub fn cards(&self) -> Vec<BatchCard> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| BatchCard {
                index,
                name: entry.name.clone(),
                thumbnail: entry.session.gallery.original().map(|v| v.encoded_image.clone()).unwrap_or_default(),
            })
            .collect()
    }

    /// Focus entry `index` and return a copy of its session for the viewer.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoImage`] for an index past the end.
    pub fn open(&mut self, index: usize) -> Result<ImageSession, ClientError> {
        let entry = self.entries.get(index).ok_or(ClientError::NoImage)?;
        self.focused = Some(index);
        Ok(entry.session.clone())
    }

    /// Write `session` back to entry `index` and drop focus.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoImage`] for an index past the end.
    pub fn store(&mut self, index: usize, session: ImageSession) -> Result<(), ClientError> {
        let entry = self.entries.get_mut(index).ok_or(ClientError::NoImage)?;
        entry.session = session;
        if self.focused == Some(index) {
            self.focused = None;
        }
        Ok(())
    }

    /// Index of the entry shown in the modal, if any.
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Drop focus, storing `session` into the focused entry when it still
    /// shows that entry's image. Returns whether the entry was updated.
    pub fn close(&mut self, session: Option<&ImageSession>) -> bool {
        let Some(index) = self.focused.take() else {
            return false;
        };
        let Some(session) = session else {
            return false;
        };
        let same_image = self.entries.get(index).is_some_and(|e| Arc::ptr_eq(&e.session.source, &session.source));
        same_image && self.store(index, session.clone()).is_ok()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.focused = None;
        self.phase = BatchPhase::Idle;
    }
}
