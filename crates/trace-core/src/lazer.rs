//! Tapering "laser" stroke that trails the pointer.
//!
//! Each burn point remembers a path index, the time it was (re)burned and
//! the width it decays from. The newest entry is the head: while the user
//! drags it ignites from zero to full width over `segment_ttl`. Every older
//! entry was frozen at the head's width when its successor was admitted and
//! shrinks back to zero over `segment_ttl`.

use std::collections::VecDeque;
use std::ops::Range;
use std::time::Duration;

use crate::constants::millis_f32;
use crate::geometry::Point;
use crate::params::LazerParams;
use crate::storage::PointStorage;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurnPoint {
    pub index: usize,
    pub burn_time: Duration,
    pub max_width: f32,
    pub width: f32,
}

impl BurnPoint {
    fn elapsed_fraction(&self, t: Duration, ttl: Duration) -> f32 {
        let passed = t.saturating_sub(self.burn_time).min(ttl);
        millis_f32(passed) / millis_f32(ttl)
    }

    /// Width growing from 0 to `max_width` over `ttl`.
    fn grown_width(&self, t: Duration, ttl: Duration) -> f32 {
        self.elapsed_fraction(t, ttl) * self.max_width
    }

    /// Width shrinking from `max_width` to 0 over `ttl`.
    fn decayed_width(&self, t: Duration, ttl: Duration) -> f32 {
        (1.0 - self.elapsed_fraction(t, ttl)) * self.max_width
    }
}

pub struct LazerTrace {
    params: LazerParams,
    points: VecDeque<BurnPoint>,
    complete: bool,
}

impl LazerTrace {
    pub fn new(params: LazerParams) -> Self {
        Self {
            params,
            points: VecDeque::new(),
            complete: false,
        }
    }

    pub fn points(&self) -> &VecDeque<BurnPoint> {
        &self.points
    }

    pub fn head(&self) -> Option<&BurnPoint> {
        self.points.back()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// True once the trace is complete and every remaining point, the head
    /// included, has shrunk to zero width.
    pub fn is_burned_out(&self) -> bool {
        self.complete && self.points.iter().all(|p| p.width <= 0.0)
    }

    pub fn on_points_added(&mut self, storage: &PointStorage, now: Duration, added: Range<usize>) {
        for i in added {
            self.add_point(storage, now, i);
        }
    }

    fn add_point(&mut self, storage: &PointStorage, now: Duration, index: usize) {
        let Some(&carried) = self.points.back() else {
            self.points.push_back(BurnPoint {
                index,
                burn_time: now,
                max_width: self.params.max_width,
                width: 0.0,
            });
            return;
        };

        let last = storage[carried.index];
        let p = storage[index];
        if last == p || last.distance(p) < self.params.min_distance_to_add {
            return;
        }

        // Freeze the old head at its current width; the new head carries the
        // ignition time and full width forward.
        let frozen = carried.grown_width(now, self.params.segment_ttl);
        if let Some(head) = self.points.back_mut() {
            *head = BurnPoint {
                index: carried.index,
                burn_time: now,
                max_width: frozen,
                width: frozen,
            };
        }
        self.points.push_back(BurnPoint { index, ..carried });
    }

    pub fn on_time_tick(&mut self, now: Duration) {
        if self.points.is_empty() {
            return;
        }

        let ttl = self.params.segment_ttl;
        // Trim expired tail points; the head is never trimmed.
        while self.points.len() > 1
            && self
                .points
                .front()
                .is_some_and(|p| now.saturating_sub(p.burn_time) > ttl)
        {
            self.points.pop_front();
        }

        let n = self.points.len();
        let igniting = !self.complete;
        for (i, p) in self.points.iter_mut().enumerate() {
            p.width = if i + 1 == n && igniting {
                p.grown_width(now, ttl)
            } else {
                p.decayed_width(now, ttl)
            };
        }
    }

    /// Stop igniting the head: it freezes at its current width and decays
    /// like the rest of the trail from `now` on, staying in place at zero
    /// width once burned out.
    pub fn on_complete(&mut self, now: Duration) {
        if self.complete {
            return;
        }
        self.complete = true;
        let ttl = self.params.segment_ttl;
        if let Some(head) = self.points.back_mut() {
            let w = head.grown_width(now, ttl);
            head.burn_time = now;
            head.max_width = w;
            head.width = w;
        }
    }

    /// Emits `(start, end, width)` for every consecutive pair using the
    /// earlier point's width, then the head as a zero-length segment.
    pub fn on_draw(&self, storage: &PointStorage, mut draw: impl FnMut(Point, Point, f32)) {
        let n = self.points.len();
        for (i, p) in self.points.iter().enumerate() {
            let start = storage[p.index];
            if i + 1 == n {
                draw(start, start, p.width);
            } else {
                draw(start, storage[self.points[i + 1].index], p.width);
            }
        }
    }
}
