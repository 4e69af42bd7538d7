//! Page-load controller.
//!
//! Drives the lifecycle stages (render, resolve links, mark the current
//! page, restore scroll) against an explicit document, container, and
//! store, so the whole pipeline runs unchanged under a browser test
//! harness.

use std::rc::Rc;

use chapternav::chapter::{self, Chapter};
use chapternav::lifecycle::Stage;
use chapternav::store::KeyValueStore;
use chapternav::{marker, resolve, scroll as scroll_plan};
use web_sys::{Document, Element};

use crate::{render, scroll, storage};

/// Container element the host page provides.
pub const SIDEBAR_ID: &str = "sidebar";
/// Scrollable child of the container holding the rendered tree.
pub const SCROLLBOX_CLASS: &str = "sidebar-scrollbox";

/// Build the sidebar inside the host page. A page without the sidebar
/// container (some layouts omit it) is left untouched.
pub fn boot(chapters: &[Chapter], path_to_root: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(scrollbox) = find_scrollbox(&document) else {
        web_sys::console::debug_1(&"chapternav: no sidebar on this page".into());
        return;
    };
    let Ok(current_url) = window.location().href() else { return };
    boot_in(&document, &scrollbox, chapters, path_to_root, &current_url, storage::open_store());
}

fn find_scrollbox(document: &Document) -> Option<Element> {
    let sidebar = document.get_element_by_id(SIDEBAR_ID)?;
    sidebar.query_selector(&format!(".{SCROLLBOX_CLASS}")).ok()?
}

/// The full page-load pipeline with every collaborator injected.
pub fn boot_in(
    document: &Document,
    scrollbox: &Element,
    chapters: &[Chapter],
    path_to_root: &str,
    current_url: &str,
    store: Rc<dyn KeyValueStore>,
) {
    let mut stage = Stage::Unrendered;
    let mut entries = chapter::flatten(chapters);

    let Ok(rendered) = render::render_into(document, scrollbox, chapters, &entries) else {
        return;
    };
    stage.advance(Stage::Rendered);

    resolve::resolve_links(&mut entries, path_to_root);
    render::apply_hrefs(&rendered, &entries);
    stage.advance(Stage::LinksResolved);

    let marks = marker::mark(&entries, path_to_root, current_url);
    render::apply_marks(&rendered, &marks);
    stage.advance(Stage::ActiveMarked);

    scroll::attach_click_recorder(scrollbox, store.clone());
    let plan = scroll_plan::plan_scroll(store.as_ref(), marks.active.is_some());
    let active_anchor = marks.active.and_then(|id| rendered.anchor(id));
    scroll::apply_plan(plan, scrollbox, active_anchor);
    stage.advance(Stage::ScrollRestored);

    debug_assert!(stage.is_terminal());
}
