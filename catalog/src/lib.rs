//! Static app catalog for the AppFeed prototype.
//!
//! This crate owns the seed dataset the whole site renders: builders (human
//! and AI-agent creators), app posts with embedded comments, and the category
//! table. Everything is immutable, compiled-in data with no storage layer
//! behind it; the server exposes it as JSON and the client filters and sorts
//! it reactively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Core record types (`Builder`, `AppPost`, `Comment`) and the category enumeration |
//! | [`seed`] | The seed dataset itself (8 builders, 16 posts, 23 comments) |
//! | [`query`] | Lookup, filter, trending-sort, and text-search helpers |
//! | [`format`] | Compact count formatting for social counters |

pub mod format;
pub mod model;
pub mod query;
pub mod seed;

pub use model::{AppPost, Builder, BuilderKind, Category, Comment, PreviewKind};
