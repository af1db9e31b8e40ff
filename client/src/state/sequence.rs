//! Ordering guard for overlapping upload requests.
//!
//! Every request takes a ticket before it is sent. When responses arrive out
//! of order, a response older than one already applied is discarded so the
//! display always reflects the newest request.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub fn seq(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    issued: u64,
    applied: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    /// Claim the right to apply a response. Returns `false` for stale tickets.
    pub fn accept(&mut self, ticket: RequestTicket) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        true
    }

    /// Invalidate every outstanding ticket.
    pub fn invalidate(&mut self) {
        self.applied = self.issued;
    }
}
