//! Scroll-offset persistence planning.
//!
//! The offset survives exactly one navigation: it is written when a sidebar
//! link is clicked and consumed on the next load. The slot lives in
//! page-scoped storage behind [`KeyValueStore`], so an unavailable store
//! degrades to the reveal-active fallback.

use crate::store::KeyValueStore;

/// Storage slot holding the sidebar scroll offset between navigations.
pub const SCROLL_OFFSET_KEY: &str = "sidebar-scroll";

/// What to do with the scrollbox once marking has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPlan {
    /// The previous page stored an offset; reapply it.
    Restore(i32),
    /// Nothing stored; center the active entry instead.
    RevealActive,
    /// Nothing stored and no active entry to reveal.
    Leave,
}

/// Consume the stored offset and decide how to position the scrollbox.
///
/// The slot is cleared even when its value does not parse; a garbled slot
/// reads as absent.
pub fn plan_scroll(store: &dyn KeyValueStore, has_active: bool) -> ScrollPlan {
    match store.take(SCROLL_OFFSET_KEY).and_then(|raw| raw.parse().ok()) {
        Some(offset) => ScrollPlan::Restore(offset),
        None if has_active => ScrollPlan::RevealActive,
        None => ScrollPlan::Leave,
    }
}

/// Record the scrollbox offset ahead of a navigation.
pub fn remember_offset(store: &dyn KeyValueStore, offset: i32) {
    store.set(SCROLL_OFFSET_KEY, &offset.to_string());
}
