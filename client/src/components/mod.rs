//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the feed surface and its overlays while reading/writing
//! shared state from Leptos context providers. Catalog data arrives as
//! `&'static` rows, so components hold ids and resolve rows at render time.

pub mod app_card;
pub mod app_detail_modal;
pub mod builder_profile_modal;
pub mod builder_spotlight;
pub mod category_bar;
pub mod fullscreen_discover;
pub mod icons;
pub mod interactive_preview;
pub mod post_app_modal;
