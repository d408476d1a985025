use rand::Rng;

use super::Vec2;

/// Region of screen space that new stickers are dropped into.
///
/// Bounds are inclusive on both axes. The default covers the whole screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InstantiationArea {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Default for InstantiationArea {
    fn default() -> Self {
        Self::new(-1.0, 1.0, -1.0, 1.0)
    }
}

impl InstantiationArea {
    #[inline]
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self { left, right, bottom, top }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.top - self.bottom
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.point_at(0.5, 0.5)
    }

    /// Maps `(tx, ty)` in `[0, 1]²` onto the area; `(0, 0)` is the left/bottom corner.
    #[inline]
    pub fn point_at(self, tx: f32, ty: f32) -> Vec2 {
        Vec2::new(self.left + self.width() * tx, self.bottom + self.height() * ty)
    }

    /// Normalizes the area so `left <= right` and `bottom <= top`.
    #[inline]
    pub fn normalized(self) -> Self {
        Self::new(
            self.left.min(self.right),
            self.left.max(self.right),
            self.bottom.min(self.top),
            self.bottom.max(self.top),
        )
    }

    /// Closed containment: `[min, max]` on both axes.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let a = self.normalized();
        p.x >= a.left && p.x <= a.right && p.y >= a.bottom && p.y <= a.top
    }

    /// Draws a uniformly distributed point inside the area.
    ///
    /// Degenerate (zero-width or zero-height) areas collapse onto their edge.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> Vec2 {
        let tx = rng.gen_range(0.0f32..=1.0);
        let ty = rng.gen_range(0.0f32..=1.0);
        self.point_at(tx, ty)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn default_covers_full_screen() {
        let a = InstantiationArea::default();
        assert_eq!((a.left, a.right, a.bottom, a.top), (-1.0, 1.0, -1.0, 1.0));
        assert_eq!(a.center(), Vec2::zero());
    }

    // ── point_at / contains ───────────────────────────────────────────────

    #[test]
    fn point_at_corners() {
        let a = InstantiationArea::new(-0.5, 0.5, 0.0, 1.0);
        assert_eq!(a.point_at(0.0, 0.0), Vec2::new(-0.5, 0.0));
        assert_eq!(a.point_at(1.0, 1.0), Vec2::new(0.5, 1.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let a = InstantiationArea::default();
        assert!(a.contains(Vec2::new(1.0, -1.0)));
        assert!(!a.contains(Vec2::new(1.01, 0.0)));
    }

    #[test]
    fn contains_handles_flipped_bounds() {
        let a = InstantiationArea::new(1.0, -1.0, 1.0, -1.0);
        assert!(a.contains(Vec2::new(0.25, -0.25)));
    }

    // ── sample ────────────────────────────────────────────────────────────

    #[test]
    fn samples_stay_inside() {
        let area = InstantiationArea::new(-0.4, 0.6, -0.2, 0.3);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..256 {
            assert!(area.contains(area.sample(&mut rng)));
        }
    }

    #[test]
    fn degenerate_area_samples_its_point() {
        let area = InstantiationArea::new(0.25, 0.25, -0.5, -0.5);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(area.sample(&mut rng), Vec2::new(0.25, -0.5));
    }
}
