//! Spooky Notes - a board of freely positioned sticky notes.
//!
//! The core (`board`, `input`, `app`) is plain Rust and drives every
//! behavior from synthetic pointer events. The gpui front end lives in
//! `render` behind the `gui` feature.

pub mod app;
pub mod board;
pub mod constants;
pub mod error;
pub mod hit_testing;
pub mod input;
pub mod logging;
pub mod perf;
#[cfg(feature = "gui")]
pub mod render;
pub mod settings;
pub mod spatial_index;
pub mod types;
