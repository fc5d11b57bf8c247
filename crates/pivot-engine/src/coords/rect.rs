use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Under a non-identity [`Transform2D`](super::Transform2D) the rect is
/// expressed in the transformed (local) space, so `origin` may be negative.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rect of `size` whose center sits on the local origin:
    /// `[-w/2, w/2] × [-h/2, h/2]`.
    #[inline]
    pub fn centered(size: Vec2) -> Self {
        Self::from_origin_size(size * -0.5, size)
    }

    #[inline]
    fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Corners in drawing order: top-left, top-right, bottom-right, bottom-left.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        let (min, max) = (self.min(), self.max());
        [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)]
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Closed containment of a whole rect (shared edges count as covered).
    #[inline]
    pub fn covers(self, other: Rect) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        b.origin.x >= a.origin.x
            && b.origin.y >= a.origin.y
            && b.max().x <= a.max().x
            && b.max().y <= a.max().y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── centered ──────────────────────────────────────────────────────────

    #[test]
    fn centered_spans_half_extents() {
        let rect = Rect::centered(Vec2::new(100.0, 40.0));
        assert_eq!(rect, r(-50.0, -20.0, 100.0, 40.0));
        assert_eq!(rect.center(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn corners_run_clockwise_from_top_left() {
        let c = r(0.0, 0.0, 2.0, 1.0).corners();
        assert_eq!(c[0], Vec2::new(0.0, 0.0));
        assert_eq!(c[1], Vec2::new(2.0, 0.0));
        assert_eq!(c[2], Vec2::new(2.0, 1.0));
        assert_eq!(c[3], Vec2::new(0.0, 1.0));
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── containment ───────────────────────────────────────────────────────

    #[test]
    fn covers_itself_and_inner_rects() {
        let outer = r(0.0, 0.0, 100.0, 100.0);
        assert!(outer.covers(outer));
        assert!(outer.covers(r(10.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn covers_rejects_partial_overlap() {
        assert!(!r(0.0, 0.0, 100.0, 100.0).covers(r(50.0, 50.0, 100.0, 10.0)));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
