use super::*;

#[test]
fn tickets_increase() {
    let mut seq = RequestSequencer::default();
    let a = seq.issue();
    let b = seq.issue();
    assert!(b > a);
    assert_eq!(b.seq(), a.seq() + 1);
}

#[test]
fn in_order_responses_are_all_applied() {
    let mut seq = RequestSequencer::default();
    let a = seq.issue();
    let b = seq.issue();
    assert!(seq.accept(a));
    assert!(seq.accept(b));
}

#[test]
fn older_response_after_newer_is_stale() {
    let mut seq = RequestSequencer::default();
    let a = seq.issue();
    let b = seq.issue();
    assert!(seq.accept(b));
    assert!(!seq.accept(a));
}

#[test]
fn ticket_is_accepted_once() {
    let mut seq = RequestSequencer::default();
    let a = seq.issue();
    assert!(seq.accept(a));
    assert!(!seq.accept(a));
}

#[test]
fn invalidate_discards_outstanding() {
    let mut seq = RequestSequencer::default();
    let a = seq.issue();
    seq.invalidate();
    assert!(!seq.accept(a));
    let b = seq.issue();
    assert!(seq.accept(b));
}
