use crate::coords::{Rect, Transform2D, Vec2};
use crate::paint::Color;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new payload struct here
/// - add a new variant
/// - teach `render::QuadRenderer` (or a sibling renderer) to consume it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(ClearCmd),
    FillRect(FillRectCmd),
}

/// Resets a surface-space region back to the background.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearCmd {
    pub rect: Rect,
}

/// Solid rectangle in local space, mapped to surface space by `transform`.
#[derive(Debug, Clone, PartialEq)]
pub struct FillRectCmd {
    pub rect: Rect,
    pub transform: Transform2D,
    pub color: Color,
}

impl FillRectCmd {
    #[inline]
    pub fn new(rect: Rect, transform: Transform2D, color: Color) -> Self {
        Self { rect, transform, color }
    }

    /// Surface-space corners (top-left, top-right, bottom-right, bottom-left in local space).
    pub fn corners(&self) -> [Vec2; 4] {
        self.rect.corners().map(|p| self.transform.apply(p))
    }
}
