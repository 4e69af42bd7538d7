//! Browser layer of the chapternav sidebar.
//!
//! Renders the chapter tree into the host page's `#sidebar` container,
//! marks the entry for the current page, and keeps the sidebar scroll
//! offset across full-page navigations. The host page calls
//! [`init_sidebar`] once per load with the tree literal and the relative
//! path from the current page to the site root.

pub mod render;
pub mod scroll;
pub mod storage;
pub mod widget;

use chapternav::Chapter;
use wasm_bindgen::prelude::*;

/// Entry point called by the host page.
///
/// A tree that fails to deserialize is the only reported error; it is a
/// host-page bug. Everything downstream (missing sidebar, refused storage)
/// degrades silently and never blocks the page content.
#[wasm_bindgen(js_name = initSidebar)]
pub fn init_sidebar(chapters: JsValue, path_to_root: String) -> Result<(), JsValue> {
    let chapters: Vec<Chapter> = serde_wasm_bindgen::from_value(chapters)
        .map_err(|error| JsValue::from_str(&format!("chapternav: invalid chapter tree: {error}")))?;
    widget::boot(&chapters, &path_to_root);
    Ok(())
}
