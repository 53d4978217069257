//! Whole-path color ramp, recomputed on every draw.

use crate::geometry::Point;
use crate::params::GradientParams;
use crate::storage::PointStorage;

/// Packed 32-bit ARGB color (`0xAARRGGBB`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque color from its channels.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Channels as normalized floats in RGBA order.
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r() as f32 / 255.0,
            self.g() as f32 / 255.0,
            self.b() as f32 / 255.0,
            self.a() as f32 / 255.0,
        ]
    }
}

/// Linear interpolation of one channel between `(xa, a)` and `(xb, b)`.
#[inline]
pub fn lerp_channel(x: f32, xa: f32, a: u8, xb: f32, b: u8) -> u8 {
    let t = ((x - xa) / (xb - xa)).clamp(0.0, 1.0);
    (t * (b as f32 - a as f32) + a as f32) as u8
}

pub struct GradientTrace {
    params: GradientParams,
}

impl GradientTrace {
    pub fn new(params: GradientParams) -> Self {
        Self { params }
    }

    /// Color at `distance` along a path of `path_length`. Stops sit at 0,
    /// half the length and the full length; a zero-length path is the
    /// first stop everywhere.
    pub fn color_at(&self, path_length: f32, distance: f32) -> Argb {
        let [c1, c2, c3] = self.params.stops;
        if path_length <= 0.0 {
            return c1;
        }
        let middle = path_length / 2.0;
        let (xa, a, xb, b) = if distance <= middle {
            (0.0, c1, middle, c2)
        } else {
            (middle, c2, path_length, c3)
        };
        Argb::from_rgb(
            lerp_channel(distance, xa, a.r(), xb, b.r()),
            lerp_channel(distance, xa, a.g(), xb, b.g()),
            lerp_channel(distance, xa, a.b(), xb, b.b()),
        )
    }

    /// One colored segment per consecutive pair of path points.
    pub fn on_draw(
        &self,
        storage: &PointStorage,
        mut draw: impl FnMut(Point, Argb, Point, Argb, f32),
    ) {
        let length = storage.path_length();
        let mut dist = 0.0;
        for pair in storage.path_points().windows(2) {
            let (p1, p2) = (pair[0], pair[1]);
            let next = dist + p1.distance(p2);
            draw(
                p1,
                self.color_at(length, dist),
                p2,
                self.color_at(length, next),
                self.params.width,
            );
            dist = next;
        }
    }
}
