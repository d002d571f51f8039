use super::*;

#[test]
fn slot_starts_idle_then_loads() {
    let mut slot = ReadSlot::<u32>::default();
    assert_eq!(*slot.state(), ReadState::Idle);

    slot.begin();
    assert!(slot.state().is_loading());
}

#[test]
fn completion_with_current_generation_is_accepted() {
    let mut slot = ReadSlot::<u32>::default();
    let generation = slot.begin();

    assert!(slot.complete(generation, Ok(7)));
    assert_eq!(slot.state().value(), Some(&7));
}

#[test]
fn stale_completion_loses_the_race_and_is_dropped() {
    let mut slot = ReadSlot::<u32>::default();
    let first = slot.begin();
    let second = slot.begin();

    // The first read resolves after a forced refetch started: dropped.
    assert!(!slot.complete(first, Ok(1)));
    assert!(slot.state().is_loading());

    assert!(slot.complete(second, Ok(2)));
    assert_eq!(slot.state().value(), Some(&2));
}

#[test]
fn failures_surface_their_message() {
    let mut slot = ReadSlot::<u32>::default();
    let generation = slot.begin();
    assert!(slot.complete(generation, Err("rpc unreachable".to_owned())));
    assert_eq!(slot.state().error(), Some("rpc unreachable"));
    assert_eq!(slot.state().value(), None);
}
