use super::*;

#[test]
fn show_makes_notice_visible() {
    let mut notice = TransientNotice::default();
    notice.show("Active Filter: Sepia");
    assert_eq!(notice.text(), Some("Active Filter: Sepia"));
}

#[test]
fn expire_with_current_ticket_hides() {
    let mut notice = TransientNotice::default();
    let ticket = notice.show("Active Filter: Sepia");
    assert!(notice.expire(ticket));
    assert!(!notice.is_visible());
}

#[test]
fn stale_ticket_does_not_hide_newer_notice() {
    let mut notice = TransientNotice::default();
    let first = notice.show("Active Filter: Sepia");
    notice.show("Active Filter: Edges");
    assert!(!notice.expire(first));
    assert_eq!(notice.text(), Some("Active Filter: Edges"));
}

#[test]
fn latest_ticket_hides_notice() {
    let mut notice = TransientNotice::default();
    notice.show("Active Filter: Sepia");
    let latest = notice.show("Active Filter: Edges");
    assert!(notice.expire(latest));
    assert!(!notice.is_visible());
}

#[test]
fn expire_twice_reports_once() {
    let mut notice = TransientNotice::default();
    let ticket = notice.show("Active Filter: Sepia");
    assert!(notice.expire(ticket));
    assert!(!notice.expire(ticket));
}

#[test]
fn clear_invalidates_outstanding_ticket() {
    let mut notice = TransientNotice::default();
    let ticket = notice.show("Active Filter: Sepia");
    notice.clear();
    assert!(!notice.expire(ticket));
    assert_eq!(notice.text(), None);
}
