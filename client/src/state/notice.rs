//! Transient "Active Filter" notice.
//!
//! Each `show` issues a new ticket; an expiry only clears the notice when it
//! carries the latest ticket, so an old timer can never hide a newer message.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long the active-filter notice stays visible.
pub const ACTIVE_FILTER_NOTICE_MS: f64 = 60_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransientNotice {
    text: Option<String>,
    generation: u64,
}

impl TransientNotice {
    /// Show `text`, superseding any earlier notice. The host hides it with
    /// [`Self::expire`] after [`ACTIVE_FILTER_NOTICE_MS`].
    pub fn show(&mut self, text: impl Into<String>) -> NoticeTicket {
        self.generation += 1;
        self.text = Some(text.into());
        NoticeTicket(self.generation)
    }

    /// Hide the notice if `ticket` is still the latest. Returns whether it was hidden.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        if ticket.0 != self.generation || self.text.is_none() {
            return false;
        }
        self.text = None;
        true
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.text = None;
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.text.is_some()
    }
}
