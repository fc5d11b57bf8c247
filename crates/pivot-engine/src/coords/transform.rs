use super::Vec2;

/// 2D affine transform in canvas convention.
///
/// Stored as `[a, b, c, d, e, f]`, i.e. the matrix
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
///
/// The `then_*` builders post-multiply, matching how successive canvas
/// `translate`/`rotate`/`scale` calls compose: the most recent call applies to
/// geometry first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2D {
    pub m: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    pub const IDENTITY: Self = Self { m: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0] };

    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { m: [a, b, c, d, e, f] }
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.m.iter().all(|v| v.is_finite())
    }

    /// Translation applied before the existing transform.
    #[inline]
    pub fn then_translate(self, tx: f32, ty: f32) -> Self {
        let [a, b, c, d, e, f] = self.m;
        Self::new(a, b, c, d, a * tx + c * ty + e, b * tx + d * ty + f)
    }

    /// Rotation by `radians` (clockwise on screen, since +Y points down).
    #[inline]
    pub fn then_rotate(self, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let [a, b, c, d, e, f] = self.m;
        Self::new(
            a * cos + c * sin,
            b * cos + d * sin,
            c * cos - a * sin,
            d * cos - b * sin,
            e,
            f,
        )
    }

    #[inline]
    pub fn then_scale(self, sx: f32, sy: f32) -> Self {
        let [a, b, c, d, e, f] = self.m;
        Self::new(a * sx, b * sx, c * sy, d * sy, e, f)
    }

    /// Maps a point from local space into the parent space.
    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        let [a, b, c, d, e, f] = self.m;
        Vec2::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }

    /// Column-major 2×3 layout for vertex attributes: `(x axis, y axis, translation)`.
    #[inline]
    pub fn columns(self) -> [[f32; 2]; 3] {
        let [a, b, c, d, e, f] = self.m;
        [[a, b], [c, d], [e, f]]
    }

    /// Signed area scale. Negative when the transform mirrors.
    #[inline]
    pub fn determinant(self) -> f32 {
        let [a, b, c, d, ..] = self.m;
        a * d - b * c
    }
}
