use crate::SearchSequencer;

#[test]
fn given_new_ticket_then_it_is_current() {
    let sequencer = SearchSequencer::new();
    let ticket = sequencer.issue();

    assert!(sequencer.is_current(ticket));
}

#[test]
fn given_newer_ticket_then_older_is_stale() {
    let sequencer = SearchSequencer::new();
    let first = sequencer.issue();
    let second = sequencer.issue();

    assert!(!sequencer.is_current(first));
    assert!(sequencer.is_current(second));
    assert!(second.generation() > first.generation());
}
