//! In-browser tests for the DOM projection and scroll persistence.

use std::rc::Rc;

use chapternav::scroll::SCROLL_OFFSET_KEY;
use chapternav::store::{KeyValueStore, MemoryStore};
use chapternav::Chapter;
use chapternav_dom::widget;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A fresh scrollbox attached to the test page, small enough to scroll.
fn fresh_scrollbox(document: &Document) -> Element {
    let scrollbox = document.create_element("div").unwrap();
    scrollbox.set_class_name("sidebar-scrollbox");
    scrollbox
        .set_attribute("style", "height: 60px; overflow-y: auto; display: block;")
        .unwrap();
    document.body().unwrap().append_child(&scrollbox).unwrap();
    scrollbox
}

fn guide_tree() -> Vec<Chapter> {
    vec![
        Chapter::page("Intro", "intro.html"),
        Chapter::group("Guide")
            .with_children(vec![Chapter::page("Install", "guide/install.html")]),
    ]
}

/// A sidebar long enough to overflow the fixture scrollbox.
fn long_tree(pages: usize) -> Vec<Chapter> {
    (0..pages)
        .map(|index| Chapter::page(format!("Page {index}"), format!("page{index}.html")))
        .collect()
}

fn boot(
    scrollbox: &Element,
    chapters: &[Chapter],
    path_to_root: &str,
    current_url: &str,
) -> Rc<MemoryStore> {
    let store = Rc::new(MemoryStore::new());
    widget::boot_in(&document(), scrollbox, chapters, path_to_root, current_url, store.clone());
    store
}

#[wasm_bindgen_test]
fn renders_nested_lists_with_numbers_and_resolved_links() {
    let document = document();
    let scrollbox = fresh_scrollbox(&document);
    boot(&scrollbox, &guide_tree(), "../", "https://docs.example.com/guide/install.html");

    assert!(scrollbox.query_selector("ol.chapter").unwrap().is_some());
    assert!(scrollbox.query_selector("ol.section").unwrap().is_some());
    assert_eq!(scrollbox.query_selector_all("a").unwrap().length(), 2);

    let intro = scrollbox.query_selector("a").unwrap().unwrap();
    assert_eq!(intro.get_attribute("href").as_deref(), Some("../intro.html"));
    assert_eq!(intro.text_content().as_deref(), Some("1. Intro"));
}

#[wasm_bindgen_test]
fn marks_the_current_page_and_expands_its_section() {
    let document = document();
    let scrollbox = fresh_scrollbox(&document);
    boot(&scrollbox, &guide_tree(), "../", "https://docs.example.com/guide/install.html");

    let active = scrollbox.query_selector("a.active").unwrap().unwrap();
    assert_eq!(active.text_content().as_deref(), Some("2.1. Install"));
    assert_eq!(scrollbox.query_selector_all("a.active").unwrap().length(), 1);

    let expanded = scrollbox.query_selector("li.expanded").unwrap().unwrap();
    assert_eq!(expanded.text_content().as_deref(), Some("2. Guide"));
    assert_eq!(scrollbox.query_selector_all("li.expanded").unwrap().length(), 1);
}

#[wasm_bindgen_test]
fn grouping_nodes_render_no_anchor() {
    let document = document();
    let scrollbox = fresh_scrollbox(&document);
    boot(&scrollbox, &guide_tree(), "", "https://docs.example.com/other.html");

    let heading = scrollbox.query_selector("li.chapter-item:nth-of-type(2)").unwrap().unwrap();
    assert!(heading.query_selector("a").unwrap().is_none());
    assert_eq!(heading.text_content().as_deref(), Some("2. Guide"));
}

#[wasm_bindgen_test]
fn clicking_a_link_records_the_scroll_offset() {
    let document = document();
    let scrollbox = fresh_scrollbox(&document);
    // Fragment links keep the synthetic click from unloading the test page.
    let chapters: Vec<Chapter> = (0..80)
        .map(|index| Chapter::page(format!("Section {index}"), format!("#section-{index}")))
        .collect();
    let store = boot(&scrollbox, &chapters, "", "https://docs.example.com/page.html");

    scrollbox.set_scroll_top(30);
    let anchor = scrollbox.query_selector("a").unwrap().unwrap();
    let init = EventInit::new();
    init.set_bubbles(true);
    let click = Event::new_with_event_init_dict("click", &init).unwrap();
    anchor.dispatch_event(&click).unwrap();

    assert_eq!(store.get(SCROLL_OFFSET_KEY).as_deref(), Some("30"));
}

#[wasm_bindgen_test]
fn stored_offset_is_restored_and_consumed() {
    let document = document();
    let scrollbox = fresh_scrollbox(&document);
    let store = Rc::new(MemoryStore::new());
    store.set(SCROLL_OFFSET_KEY, "25");

    widget::boot_in(
        &document,
        &scrollbox,
        &long_tree(80),
        "",
        "https://docs.example.com/nowhere.html",
        store.clone(),
    );

    assert_eq!(scrollbox.scroll_top(), 25);
    assert_eq!(store.get(SCROLL_OFFSET_KEY), None);
}

#[wasm_bindgen_test]
fn without_stored_offset_the_active_entry_is_scrolled_into_view() {
    let document = document();
    let scrollbox = fresh_scrollbox(&document);
    boot(&scrollbox, &long_tree(80), "", "https://docs.example.com/page60.html");

    assert!(scrollbox.query_selector("a.active").unwrap().is_some());
    assert!(scrollbox.scroll_top() > 0);
}

#[wasm_bindgen_test]
fn page_without_sidebar_container_is_left_untouched() {
    // No #sidebar in the test document: boot must be a silent no-op.
    widget::boot(&guide_tree(), "");
}
