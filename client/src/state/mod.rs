//! Client-side state shared via Leptos context.
//!
//! ARCHITECTURE
//! ============
//! State structs are plain data with pure methods so they stay testable
//! off-browser. Components wrap them in `RwSignal` and react to changes;
//! nothing in here touches the DOM.

pub mod discover;
pub mod draft;
pub mod engagement;
pub mod feed;
pub mod ui;
