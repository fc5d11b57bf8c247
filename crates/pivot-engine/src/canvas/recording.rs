use crate::coords::{Rect, Viewport};
use crate::paint::Color;

use super::Surface;

/// One recorded [`Surface`] call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SurfaceOp {
    ClearRect(Rect),
    Save,
    Restore,
    Translate { dx: f32, dy: f32 },
    Rotate(f32),
    Scale { sx: f32, sy: f32 },
    SetFillStyle(Color),
    FillRect(Rect),
}

/// [`Surface`] that draws nothing and records every call in order.
///
/// Used to assert the exact transform sequence a caller issues.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Viewport,
    ops: Vec<SurfaceOp>,
    depth: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(Viewport::new(640.0, 480.0))
    }
}

impl RecordingSurface {
    pub fn new(size: Viewport) -> Self {
        Self { size, ops: Vec::new(), depth: 0 }
    }

    #[inline]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Returns the recorded calls and starts a fresh recording.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn fill_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, SurfaceOp::FillRect(_))).count()
    }

    /// Saves minus restores seen so far (restores past zero are not counted).
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::ClearRect(rect));
    }

    fn save(&mut self) {
        self.depth += 1;
        self.ops.push(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.ops.push(SurfaceOp::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(SurfaceOp::Translate { dx, dy });
    }

    fn rotate(&mut self, radians: f32) {
        self.ops.push(SurfaceOp::Rotate(radians));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.ops.push(SurfaceOp::Scale { sx, sy });
    }

    fn set_fill_style(&mut self, color: Color) {
        self.ops.push(SurfaceOp::SetFillStyle(color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::FillRect(rect));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_uses_full_surface_bounds() {
        let mut s = RecordingSurface::new(Viewport::new(320.0, 200.0));
        s.clear();
        assert_eq!(s.ops(), &[SurfaceOp::ClearRect(Rect::new(0.0, 0.0, 320.0, 200.0))]);
    }

    #[test]
    fn guard_records_balanced_save_restore() {
        let mut s = RecordingSurface::default();
        {
            let mut g = s.saved();
            g.rotate(1.0);
        }
        assert_eq!(s.ops(), &[SurfaceOp::Save, SurfaceOp::Rotate(1.0), SurfaceOp::Restore]);
        assert_eq!(s.depth(), 0);
    }

    #[test]
    fn take_ops_resets_recording() {
        let mut s = RecordingSurface::default();
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(s.fill_count(), 1);
        assert_eq!(s.take_ops().len(), 1);
        assert!(s.ops().is_empty());
    }
}
