//! Single-rectangle transform model.
//!
//! A [`ShapeRenderer`] owns one [`Shape`] and an injected drawing surface.
//! Each operation (translate, rotate, reflect) updates the shape and repaints
//! it through the surface's transform stack.

mod config;
mod renderer;
mod shape;

pub use config::ShapeConfig;
pub use renderer::{ShapeRenderer, Trigger};
pub use shape::Shape;
