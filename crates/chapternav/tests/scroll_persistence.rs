//! One-shot scroll persistence across a simulated navigation.

use chapternav::scroll::{plan_scroll, remember_offset, ScrollPlan, SCROLL_OFFSET_KEY};
use chapternav::store::{KeyValueStore, MemoryStore, NoopStore};

#[test]
fn stored_offset_round_trips_and_empties_the_slot() {
    let store = MemoryStore::new();
    remember_offset(&store, 84);

    assert_eq!(plan_scroll(&store, true), ScrollPlan::Restore(84));
    assert_eq!(store.get(SCROLL_OFFSET_KEY), None);

    // The slot is single-use: the next load starts from the fallback.
    assert_eq!(plan_scroll(&store, true), ScrollPlan::RevealActive);
}

#[test]
fn zero_offset_still_restores() {
    let store = MemoryStore::new();
    remember_offset(&store, 0);
    assert_eq!(plan_scroll(&store, true), ScrollPlan::Restore(0));
}

#[test]
fn empty_slot_reveals_the_active_entry() {
    let store = MemoryStore::new();
    assert_eq!(plan_scroll(&store, true), ScrollPlan::RevealActive);
}

#[test]
fn empty_slot_without_active_entry_leaves_the_scrollbox() {
    let store = MemoryStore::new();
    assert_eq!(plan_scroll(&store, false), ScrollPlan::Leave);
}

#[test]
fn garbled_slot_reads_as_absent_and_is_cleared() {
    let store = MemoryStore::new();
    store.set(SCROLL_OFFSET_KEY, "not-a-number");

    assert_eq!(plan_scroll(&store, true), ScrollPlan::RevealActive);
    assert_eq!(store.get(SCROLL_OFFSET_KEY), None);
}

#[test]
fn unavailable_storage_degrades_to_the_fallback() {
    let store = NoopStore;
    remember_offset(&store, 300);
    assert_eq!(plan_scroll(&store, true), ScrollPlan::RevealActive);
    assert_eq!(plan_scroll(&store, false), ScrollPlan::Leave);
}
