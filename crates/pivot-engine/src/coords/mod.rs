//! Coordinate and geometry types shared across the canvas, the shape model,
//! and the GPU renderer.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down (positive rotation turns clockwise on screen)
//!
//! The renderer converts to NDC in its vertex shader using a viewport uniform.

mod rect;
mod transform;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use transform::Transform2D;
pub use vec2::Vec2;
pub use viewport::Viewport;
