//! Plain value types shared by the effects and handed to renderers.

use glam::Vec2;

/// One path sample. Equality is exact; near-duplicates are filtered by
/// distance before they ever reach the storage.
pub type Point = Vec2;

/// Running axis-aligned bounding box. `left` holds the minimum corner and
/// `right` the maximum corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: Point,
    pub right: Point,
}

impl Bounds {
    pub fn from_point(p: Point) -> Self {
        Self { left: p, right: p }
    }

    pub fn include(&mut self, p: Point) {
        self.left = self.left.min(p);
        self.right = self.right.max(p);
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right.x - self.left.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.right.y - self.left.y
    }

    #[inline]
    pub fn center(&self) -> Point {
        (self.left + self.right) * 0.5
    }

    /// Grow (or shrink, for negative `margin`) on every side.
    pub fn inflate(&self, margin: f32) -> Self {
        Self {
            left: self.left - Vec2::splat(margin),
            right: self.right + Vec2::splat(margin),
        }
    }
}

/// Three-point corner curve: start, control (the box corner), end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConicFragment {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl ConicFragment {
    /// Point on the quadratic curve through the fragment, `t` in \[0, 1\].
    pub fn point_at(&self, t: f32) -> Point {
        let u = 1.0 - t;
        self.p0 * (u * u) + self.p1 * (2.0 * u * t) + self.p2 * (t * t)
    }
}

/// One frame of the completion rectangle.
///
/// `progress` is the elapsed fraction of the grow animation in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectFrame {
    pub center: Point,
    pub left_top: ConicFragment,
    pub right_top: ConicFragment,
    pub left_bottom: ConicFragment,
    pub right_bottom: ConicFragment,
    pub progress: f32,
}

impl RectFrame {
    pub fn corners(&self) -> [&ConicFragment; 4] {
        [
            &self.left_top,
            &self.right_top,
            &self.left_bottom,
            &self.right_bottom,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowRect {
    pub top_left: Point,
    pub bottom_right: Point,
    pub alpha: f32,
}
