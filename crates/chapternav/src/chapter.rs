//! Static chapter tree and its flattened, document-order projection.

use serde::{Deserialize, Serialize};

/// One navigable item in the sidebar: a page of the generated site, or a
/// grouping node without a page of its own (`href: None`).
///
/// The host page hands the tree over as a literal structure; it is immutable
/// for the lifetime of the page. An entry with a missing href deserializes
/// as a grouping node and is never matched as active.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub children: Vec<Chapter>,
}

impl Chapter {
    /// A leaf entry pointing at a page.
    pub fn page(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            children: Vec::new(),
        }
    }

    /// A grouping node with no page of its own.
    pub fn group(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Chapter>) -> Self {
        self.children = children;
        self
    }
}

/// Document-order index of an entry in the flattened tree.
///
/// The renderer assigns ids in the same preorder walk, so an `EntryId`
/// addresses the same entry in the model and in the DOM.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub usize);

/// Flattened view of one chapter. One `Entry` per tree node, created at
/// load time and never recreated afterward.
///
/// `raw_href` is the link as authored in the tree; `href` is the rewritten
/// form filled in by [`crate::resolve::resolve_links`]. Keeping both means
/// the rewrite always derives from the authored value, so running the
/// resolve stage again can never double-prefix a link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub parent: Option<EntryId>,
    pub depth: usize,
    /// Hierarchical section number, e.g. `"3.1."`.
    pub number: String,
    pub label: String,
    /// Link as authored in the tree; `None` for grouping nodes.
    pub raw_href: Option<String>,
    /// Link rewritten for the current page depth; `None` until resolved.
    pub href: Option<String>,
}

impl Entry {
    /// Grouping nodes render a heading but nothing to click.
    pub fn is_anchored(&self) -> bool {
        self.raw_href.is_some()
    }
}

/// Flatten the tree in document order (preorder), assigning ids, parent
/// links, depths, and section numbers.
pub fn flatten(chapters: &[Chapter]) -> Vec<Entry> {
    let mut entries = Vec::new();
    flatten_level(chapters, None, 0, "", &mut entries);
    entries
}

fn flatten_level(
    chapters: &[Chapter],
    parent: Option<EntryId>,
    depth: usize,
    number_prefix: &str,
    out: &mut Vec<Entry>,
) {
    for (position, chapter) in chapters.iter().enumerate() {
        let id = EntryId(out.len());
        let number = format!("{number_prefix}{}.", position + 1);
        out.push(Entry {
            id,
            parent,
            depth,
            number: number.clone(),
            label: chapter.label.clone(),
            raw_href: chapter.href.clone(),
            href: None,
        });
        flatten_level(&chapter.children, Some(id), depth + 1, &number, out);
    }
}

/// Ids of the strict ancestors of `id`, nearest first.
pub fn ancestors(entries: &[Entry], id: EntryId) -> Vec<EntryId> {
    let mut chain = Vec::new();
    let mut current = entries.get(id.0).and_then(|entry| entry.parent);
    while let Some(parent) = current {
        chain.push(parent);
        current = entries[parent.0].parent;
    }
    chain
}
