//! The single timer slot behind the active-filter notice.
//!
//! Scheduling a new expiry drops the previous `Timeout`, which cancels it, so
//! at most one timer is ever pending. The ticket check in
//! `TransientNotice::expire` covers the case where a timer already fired.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::state::notice::{ACTIVE_FILTER_NOTICE_MS, NoticeTicket};
use crate::state::viewer::ViewerState;

thread_local! {
    static NOTICE_TIMER: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

/// Hide the notice for `ticket` after [`ACTIVE_FILTER_NOTICE_MS`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn schedule(viewer: RwSignal<ViewerState>, ticket: NoticeTicket) {
    let timeout = Timeout::new(ACTIVE_FILTER_NOTICE_MS as u32, move || {
        viewer.update(|v| {
            v.notice.expire(ticket);
        });
    });
    // Dropping the previous handle cancels it.
    NOTICE_TIMER.with(|slot| drop(slot.borrow_mut().replace(timeout)));
}

/// Cancel any pending expiry.
pub fn cancel() {
    NOTICE_TIMER.with(|slot| drop(slot.borrow_mut().take()));
}
