//! Paint model shared between the canvas and the renderer.
//!
//! Fill styles are solid colors in linear premultiplied alpha.
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
