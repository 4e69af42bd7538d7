//! Browser half of scroll persistence.
//!
//! A passive click listener on the scrollbox records the offset right
//! before the browser follows a sidebar link; the next page load consumes
//! the slot and either reapplies the offset or centers the active entry.

use std::rc::Rc;

use chapternav::scroll::{self, ScrollPlan};
use chapternav::store::KeyValueStore;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Record the scrollbox offset whenever a sidebar link is clicked.
///
/// The closure is leaked: it must outlive this call and the page unload
/// reclaims it together with the widget.
pub fn attach_click_recorder(scrollbox: &Element, store: Rc<dyn KeyValueStore>) {
    let target = scrollbox.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let clicked_link = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .is_some_and(|element| element.tag_name() == "A");
        if clicked_link {
            scroll::remember_offset(store.as_ref(), target.scroll_top());
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = scrollbox.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// Position the scrollbox after marking: reapply a stored offset, or
/// center the active entry when nothing was stored.
pub fn apply_plan(plan: ScrollPlan, scrollbox: &Element, active_anchor: Option<&Element>) {
    match plan {
        ScrollPlan::Restore(offset) => scrollbox.set_scroll_top(offset),
        ScrollPlan::RevealActive => {
            if let Some(anchor) = active_anchor {
                let options = ScrollIntoViewOptions::new();
                options.set_block(ScrollLogicalPosition::Center);
                anchor.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
        ScrollPlan::Leave => {}
    }
}
