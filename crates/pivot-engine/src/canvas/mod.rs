//! Drawing-surface capability.
//!
//! [`Surface`] is the immediate-mode 2D API consumers draw through: clear,
//! a save/restore transform stack, translate/rotate/scale, fill style and
//! fill rect. Coordinates are logical pixels, +Y down.
//!
//! Implementations:
//! - [`Canvas`]: retains fills in a `scene::DrawList` for GPU presentation
//! - [`RecordingSurface`]: records every call, for asserting call sequences

mod guard;
mod recording;
mod retained;

pub use guard::SavedState;
pub use recording::{RecordingSurface, SurfaceOp};
pub use retained::Canvas;

use crate::coords::{Rect, Viewport};
use crate::paint::Color;

/// 2D drawing surface with a transform stack.
pub trait Surface {
    /// Full surface extent in logical pixels.
    fn size(&self) -> Viewport;

    /// Resets `rect` (in surface space, ignoring the current transform) to empty.
    fn clear_rect(&mut self, rect: Rect);

    /// Pushes the current transform and fill style.
    fn save(&mut self);

    /// Pops the most recently saved state. No-op when nothing is saved.
    fn restore(&mut self);

    fn translate(&mut self, dx: f32, dy: f32);

    /// Rotates the coordinate system; positive is clockwise on screen.
    fn rotate(&mut self, radians: f32);

    fn scale(&mut self, sx: f32, sy: f32);

    fn set_fill_style(&mut self, color: Color);

    /// Fills `rect` (in current local space) with the current fill style.
    fn fill_rect(&mut self, rect: Rect);

    /// Clears the entire surface.
    fn clear(&mut self) {
        let bounds = self.size().bounds();
        self.clear_rect(bounds);
    }

    /// Saves the current state and returns a guard that restores it on drop.
    ///
    /// The guard derefs to the surface, so drawing continues through it.
    fn saved(&mut self) -> SavedState<'_, Self>
    where
        Self: Sized,
    {
        SavedState::new(self)
    }
}
