//! DOM projection of the chapter tree.
//!
//! Builds the nested chapter list once per load and keeps element handles
//! per entry, so the later stages (link resolution, marking) mutate the
//! tree through the handles instead of re-querying the DOM.

use chapternav::chapter::{Chapter, Entry, EntryId};
use chapternav::marker::Marks;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Handles to the rendered elements, in document order.
///
/// Ids are assigned in the same preorder walk as `chapter::flatten`, so an
/// `EntryId` addresses the same entry in the model and here.
pub struct RenderedTree {
    /// `<li class="chapter-item">` per entry.
    items: Vec<(EntryId, Element)>,
    /// Anchor per linked entry; grouping nodes render no anchor.
    anchors: Vec<(EntryId, Element)>,
}

impl RenderedTree {
    pub fn anchor(&self, id: EntryId) -> Option<&Element> {
        self.anchors
            .iter()
            .find(|(anchor_id, _)| *anchor_id == id)
            .map(|(_, element)| element)
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }
}

/// Build the nested chapter list inside `scrollbox`.
///
/// Anchors initially carry the hrefs as authored in the tree; the resolve
/// stage overwrites them via [`apply_hrefs`]. Entry labels and section
/// numbers come from the flattened model.
pub fn render_into(
    document: &Document,
    scrollbox: &Element,
    chapters: &[Chapter],
    entries: &[Entry],
) -> Result<RenderedTree, JsValue> {
    let mut tree = RenderedTree {
        items: Vec::with_capacity(entries.len()),
        anchors: Vec::new(),
    };
    let mut next_id = 0;

    let root = document.create_element("ol")?;
    root.set_class_name("chapter");
    render_level(document, &root, chapters, entries, &mut next_id, &mut tree)?;

    scrollbox.set_inner_html("");
    scrollbox.append_child(&root)?;
    Ok(tree)
}

fn render_level(
    document: &Document,
    list: &Element,
    chapters: &[Chapter],
    entries: &[Entry],
    next_id: &mut usize,
    out: &mut RenderedTree,
) -> Result<(), JsValue> {
    for chapter in chapters {
        let id = EntryId(*next_id);
        *next_id += 1;
        let entry = &entries[id.0];

        let item = document.create_element("li")?;
        item.set_class_name("chapter-item");

        let number = document.create_element("strong")?;
        number.set_attribute("aria-hidden", "true")?;
        number.set_text_content(Some(&entry.number));

        let label = document.create_text_node(&format!(" {}", entry.label));
        if let Some(href) = entry.raw_href.as_deref() {
            let anchor = document.create_element("a")?;
            anchor.set_attribute("href", href)?;
            anchor.append_child(&number)?;
            anchor.append_child(&label)?;
            item.append_child(&anchor)?;
            out.anchors.push((id, anchor));
        } else {
            // Grouping node: heading only, nothing to click.
            item.append_child(&number)?;
            item.append_child(&label)?;
        }
        list.append_child(&item)?;
        out.items.push((id, item));

        if !chapter.children.is_empty() {
            let wrapper = document.create_element("li")?;
            let section = document.create_element("ol")?;
            section.set_class_name("section");
            render_level(document, &section, &chapter.children, entries, next_id, out)?;
            wrapper.append_child(&section)?;
            list.append_child(&wrapper)?;
        }
    }
    Ok(())
}

/// Write every anchor's rewritten link.
///
/// The value comes from the flattened model, never from the DOM, so
/// re-running the stage writes identical bytes.
pub fn apply_hrefs(tree: &RenderedTree, entries: &[Entry]) {
    for (id, anchor) in &tree.anchors {
        if let Some(href) = entries[id.0].href.as_deref() {
            let _ = anchor.set_attribute("href", href);
        }
    }
}

/// Toggle the `active` / `expanded` classes per the marking result. Host
/// styling reacts through stylesheet rules alone.
pub fn apply_marks(tree: &RenderedTree, marks: &Marks) {
    if let Some(id) = marks.active {
        if let Some(anchor) = tree.anchor(id) {
            let _ = anchor.class_list().add_1("active");
        }
    }
    for (id, item) in &tree.items {
        if marks.is_expanded(*id) {
            let _ = item.class_list().add_1("expanded");
        }
    }
}
