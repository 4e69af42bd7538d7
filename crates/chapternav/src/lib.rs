//! Chapter-tree sidebar model for generated documentation sites.
//!
//! The browser-independent half of the sidebar widget: the chapter tree and
//! its flattened document-order view, link rewriting, active-page marking,
//! scroll planning, and the key-value storage capability. The
//! `chapternav-dom` crate projects this model onto the DOM of a host page.

pub mod chapter;
pub mod lifecycle;
pub mod marker;
pub mod resolve;
pub mod scroll;
pub mod store;

pub use chapter::{Chapter, Entry, EntryId};
pub use lifecycle::Stage;
pub use marker::Marks;
pub use scroll::ScrollPlan;
