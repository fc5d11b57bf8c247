use crate::coords::{Rect, Transform2D, Viewport};
use crate::paint::Color;
use crate::scene::{ClearCmd, DrawCmd, DrawList, FillRectCmd};

use super::Surface;

/// Save/restore-able drawing state.
#[derive(Debug, Copy, Clone, PartialEq)]
struct CanvasState {
    transform: Transform2D,
    fill: Color,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            transform: Transform2D::IDENTITY,
            fill: Color::BLACK,
        }
    }
}

/// Retained-mode [`Surface`].
///
/// Fills are recorded into a [`DrawList`] with the transform that was current
/// at the time of the call; the list is what a renderer presents each frame.
/// Surface content therefore persists until it is cleared, like a canvas
/// bitmap.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: Viewport,
    state: CanvasState,
    stack: Vec<CanvasState>,
    draw_list: DrawList,
}

impl Canvas {
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            state: CanvasState::default(),
            stack: Vec::new(),
            draw_list: DrawList::new(),
        }
    }

    /// Updates the surface extent. Recorded content is kept.
    pub fn resize(&mut self, size: Viewport) {
        self.size = size;
    }

    /// Commands recorded since the last full clear, in paint order.
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    #[inline]
    pub fn transform(&self) -> Transform2D {
        self.state.transform
    }

    #[inline]
    pub fn fill_style(&self) -> Color {
        self.state.fill
    }

    /// Number of saved states on the stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Surface for Canvas {
    fn size(&self) -> Viewport {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        let rect = rect.normalized();
        if rect.covers(self.size.bounds()) {
            // Nothing recorded so far can remain visible.
            self.draw_list.clear();
        } else if !rect.is_empty() {
            self.draw_list.push(DrawCmd::Clear(ClearCmd { rect }));
        }
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::debug!("Canvas::restore with empty stack; ignored"),
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.transform = self.state.transform.then_translate(dx, dy);
    }

    fn rotate(&mut self, radians: f32) {
        self.state.transform = self.state.transform.then_rotate(radians);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.state.transform = self.state.transform.then_scale(sx, sy);
    }

    fn set_fill_style(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        let rect = rect.normalized();
        if rect.is_empty() || !rect.is_finite() || !self.state.transform.is_finite() {
            return;
        }
        self.draw_list.push(DrawCmd::FillRect(FillRectCmd::new(
            rect,
            self.state.transform,
            self.state.fill,
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use std::f32::consts::FRAC_PI_2;

    fn canvas() -> Canvas {
        Canvas::new(Viewport::new(400.0, 300.0))
    }

    fn fills(c: &Canvas) -> Vec<&FillRectCmd> {
        c.draw_list()
            .items()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::FillRect(f) => Some(f),
                _ => None,
            })
            .collect()
    }

    // ── transform stack ───────────────────────────────────────────────────

    #[test]
    fn restore_returns_to_saved_transform() {
        let mut c = canvas();
        c.save();
        c.translate(10.0, 20.0);
        c.rotate(FRAC_PI_2);
        c.restore();
        assert!(c.transform().is_identity());
        assert_eq!(c.depth(), 0);
    }

    #[test]
    fn restore_also_restores_fill_style() {
        let mut c = canvas();
        c.save();
        c.set_fill_style(Color::BLUE);
        c.restore();
        assert_eq!(c.fill_style(), Color::BLACK);
    }

    #[test]
    fn unbalanced_restore_is_ignored() {
        let mut c = canvas();
        c.translate(5.0, 5.0);
        c.restore();
        assert_eq!(c.transform(), Transform2D::IDENTITY.then_translate(5.0, 5.0));
    }

    #[test]
    fn guard_restores_on_drop() {
        let mut c = canvas();
        {
            let mut s = c.saved();
            s.translate(1.0, 2.0);
            assert_eq!(s.depth(), 1);
        }
        assert!(c.transform().is_identity());
        assert_eq!(c.depth(), 0);
    }

    #[test]
    fn guard_restores_when_unwinding() {
        let mut c = canvas();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut s = c.saved();
            s.scale(-1.0, 1.0);
            panic!("draw failed");
        }));
        assert!(result.is_err());
        assert!(c.transform().is_identity());
        assert_eq!(c.depth(), 0);
    }

    // ── fills ─────────────────────────────────────────────────────────────

    #[test]
    fn fill_records_current_transform_and_color() {
        let mut c = canvas();
        c.translate(150.0, 150.0);
        c.set_fill_style(Color::BLUE);
        c.fill_rect(Rect::centered(Vec2::new(100.0, 100.0)));

        let f = fills(&c);
        assert_eq!(f.len(), 1);
        assert_eq!(f[0].color, Color::BLUE);
        assert_eq!(f[0].corners()[0], Vec2::new(100.0, 100.0));
        assert_eq!(f[0].corners()[2], Vec2::new(200.0, 200.0));
    }

    #[test]
    fn empty_fill_is_skipped() {
        let mut c = canvas();
        c.fill_rect(Rect::new(0.0, 0.0, 0.0, 10.0));
        assert!(c.draw_list().is_empty());
    }

    #[test]
    fn negative_size_fill_is_normalized() {
        let mut c = canvas();
        c.fill_rect(Rect::new(10.0, 10.0, -10.0, -10.0));
        assert_eq!(fills(&c)[0].rect, Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    // ── clearing ──────────────────────────────────────────────────────────

    #[test]
    fn full_clear_drops_recorded_fills() {
        let mut c = canvas();
        c.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        c.clear();
        assert!(c.draw_list().is_empty());
    }

    #[test]
    fn partial_clear_is_recorded_in_order() {
        let mut c = canvas();
        c.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        c.clear_rect(Rect::new(0.0, 0.0, 5.0, 5.0));
        assert_eq!(c.draw_list().len(), 2);
        assert!(matches!(c.draw_list().items()[1], DrawCmd::Clear(_)));
    }

    #[test]
    fn clear_ignores_current_transform() {
        let mut c = canvas();
        c.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        c.translate(1000.0, 1000.0);
        c.clear();
        assert!(c.draw_list().is_empty());
    }
}
