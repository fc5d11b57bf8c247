//! Pivot engine crate.
//!
//! This crate owns the drawing-surface capability, the retained draw stream,
//! and the platform + GPU runtime pieces used to present it.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod canvas;
pub mod render;
pub mod paint;
pub mod scene;
