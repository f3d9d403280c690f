//! Widget simulations behind the interactive preview tiles.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Each feed
//! card with an interactive preview hosts one of these mini apps; a shipped
//! version would embed the real deployed app, so every simulation here is a
//! small stand-in with genuine behavior. The state machines are plain Rust
//! with no DOM types, driven by timer ticks and pointer events the host
//! component forwards. Only [`render`] touches the canvas API.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`widget`] | Maps a post's preview tag to the widget that can mount it |
//! | [`mood`] | Sentiment-to-hue mapping for the mood ring |
//! | [`breathing`] | Inhale/hold/exhale cycle for the breathing guide |
//! | [`meeting`] | Running dollar meter for the meeting cost counter |
//! | [`grid`] | Shared pixel-territory grid for the color war |
//! | [`wallpaper`] | Seed-word hashing and procedural wallpaper geometry |
//! | [`ramen`] | Noodle firmness levels and countdown timer |
//! | [`render`] | Canvas 2D drawing for the grid and wallpaper widgets |
//! | [`consts`] | Shared dimensions and tick cadences |

pub mod breathing;
pub mod consts;
pub mod grid;
pub mod meeting;
pub mod mood;
pub mod ramen;
pub mod render;
pub mod wallpaper;
pub mod widget;

pub use widget::WidgetKind;
