use std::f64::consts::TAU;

use anyhow::{ensure, Result};
use pivot_engine::coords::{Rect, Transform2D, Vec2};

/// The rectangle being manipulated.
///
/// Invariants:
/// - `width > 0` and `height > 0`
/// - position and angle are finite
///
/// Rotation and mirroring pivot on the geometric center. The angle is kept
/// in `f64` and never normalized; it is reduced mod 2π only when handed to a
/// surface, so large accumulated angles still land on the right orientation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shape {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    angle: f64,
    reflected: bool,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            x: 100.0,
            y: 100.0,
            width: 100.0,
            height: 100.0,
            angle: 0.0,
            reflected: false,
        }
    }
}

impl Shape {
    /// Unrotated, unmirrored shape with its top-left corner at `(x, y)`.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self> {
        ensure!(x.is_finite() && y.is_finite(), "shape position must be finite, got ({x}, {y})");
        ensure!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            "shape size must be positive, got {width}x{height}"
        );
        Ok(Self { x, y, width, height, angle: 0.0, reflected: false })
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Accumulated rotation in radians.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The angle reduced mod 2π, in surface precision.
    #[inline]
    pub fn surface_angle(&self) -> f32 {
        (self.angle % TAU) as f32
    }

    #[inline]
    pub fn reflected(&self) -> bool {
        self.reflected
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// Untransformed footprint in surface space.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The shape in its own frame: centered on the origin.
    #[inline]
    pub fn local_rect(&self) -> Rect {
        Rect::centered(Vec2::new(self.width, self.height))
    }

    /// Local-to-surface transform: move to center, rotate, then mirror.
    pub fn transform(&self) -> Transform2D {
        let c = self.center();
        let t = Transform2D::IDENTITY
            .then_translate(c.x, c.y)
            .then_rotate(self.surface_angle());
        if self.reflected { t.then_scale(-1.0, 1.0) } else { t }
    }

    /// Painted vertices in surface space, in the order of
    /// [`Rect::corners`] applied to [`local_rect`](Self::local_rect).
    pub fn corners(&self) -> [Vec2; 4] {
        let t = self.transform();
        self.local_rect().corners().map(|p| t.apply(p))
    }

    pub(crate) fn shift_x(&mut self, dx: f32) {
        self.x += dx;
    }

    pub(crate) fn turn(&mut self, radians: f64) {
        self.angle += radians;
    }

    pub(crate) fn toggle_reflection(&mut self) {
        self.reflected = !self.reflected;
    }
}
