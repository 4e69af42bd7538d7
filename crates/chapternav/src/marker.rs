//! Active-entry detection and ancestor expansion.

use std::collections::BTreeSet;

use crate::chapter::{self, Entry, EntryId};
use crate::resolve;

/// Which entry is the current page and which section headings reveal it.
///
/// At most one entry is ever active, and `expanded` holds exactly the strict
/// ancestors of the active entry, nothing off that path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Marks {
    pub active: Option<EntryId>,
    pub expanded: BTreeSet<EntryId>,
}

impl Marks {
    pub fn is_active(&self, id: EntryId) -> bool {
        self.active == Some(id)
    }

    pub fn is_expanded(&self, id: EntryId) -> bool {
        self.expanded.contains(&id)
    }
}

/// Find the entry for the current page and the sections to expand.
///
/// Entries are scanned in document order and the first exact match wins.
/// Matching compares resolved absolute URLs, so [`resolve::resolve_links`]
/// must have run first. When the page is the site root's directory index and
/// no entry names it, the first anchored entry stands in for it; an index
/// page deeper in the site with no matching entry yields no active entry.
pub fn mark(entries: &[Entry], path_to_root: &str, current_url: &str) -> Marks {
    let current = resolve::normalize_page_url(current_url);

    let mut active = None;
    for entry in entries {
        let Some(href) = entry.href.as_deref() else {
            continue;
        };
        if resolve::absolutize(current_url, href) == current.as_ref() {
            active = Some(entry.id);
            break;
        }
    }

    // The site root's bare index aliases the first chapter.
    if active.is_none() && path_to_root.is_empty() && current.ends_with("/index.html") {
        active = entries.iter().find(|entry| entry.is_anchored()).map(|entry| entry.id);
    }

    let expanded = match active {
        Some(id) => chapter::ancestors(entries, id).into_iter().collect(),
        None => BTreeSet::new(),
    };

    Marks { active, expanded }
}
