use std::ops::{Index, Range};

use crate::geometry::Point;

/// Append-only history of one trace plus its running length.
///
/// Effects remember positions in the path as indices into this storage. The
/// storage never shrinks or reorders while a trace is alive, so an index that
/// was valid once stays valid until [`PointStorage::clear`].
#[derive(Clone, Debug, Default)]
pub struct PointStorage {
    points: Vec<Point>,
    path_length: f32,
}

impl PointStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.points = Vec::new();
        self.path_length = 0.0;
    }

    /// Append `points` in order and return the index range they occupy.
    pub fn add_points(&mut self, points: &[Point]) -> Range<usize> {
        let start = self.points.len();
        self.points.reserve(points.len());
        for &p in points {
            if let Some(last) = self.points.last() {
                self.path_length += last.distance(p);
            }
            self.points.push(p);
        }
        start..self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Read-only view of the whole path. Re-fetch after every append.
    #[inline]
    pub fn path_points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn path_length(&self) -> f32 {
        self.path_length
    }

    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

impl Index<usize> for PointStorage {
    type Output = Point;

    fn index(&self, idx: usize) -> &Point {
        &self.points[idx]
    }
}
