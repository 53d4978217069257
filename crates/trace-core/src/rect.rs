//! Completion animation: four rounded corners that grow along the path's
//! bounding box until they meet, plus a fading shadow rectangle that kicks in
//! near the end of the growth.

use std::ops::Range;
use std::time::Duration;

use glam::Vec2;

use crate::constants::millis_f32;
use crate::geometry::{Bounds, ConicFragment, RectFrame, ShadowRect};
use crate::params::{RectParams, ShadowParams};
use crate::storage::PointStorage;

#[inline]
fn elapsed_fraction(start: Duration, now: Duration, ttl: Duration) -> f32 {
    (millis_f32(now.saturating_sub(start)) / millis_f32(ttl)).clamp(0.0, 1.0)
}

pub struct RectAnimator {
    params: RectParams,
    shadow_params: ShadowParams,
    bounds: Option<Bounds>,
    start_time: Option<Duration>,
    now: Duration,
    shadow: Option<ShadowRectAnimator>,
}

impl RectAnimator {
    pub fn new(params: RectParams, shadow_params: ShadowParams) -> Self {
        Self {
            params,
            shadow_params,
            bounds: None,
            start_time: None,
            now: Duration::ZERO,
            shadow: None,
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn shadow(&self) -> Option<&ShadowRectAnimator> {
        self.shadow.as_ref()
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Elapsed fraction of the grow animation, 0 before `start`.
    pub fn progress(&self) -> f32 {
        self.start_time.map_or(0.0, |start| {
            elapsed_fraction(start, self.now, self.params.animation_ttl)
        })
    }

    pub fn is_finished(&self) -> bool {
        self.is_started() && self.progress() >= 1.0
    }

    /// Min/max reduction over the newly added indices. The box is frozen
    /// once the animation has started.
    pub fn on_points_added(&mut self, storage: &PointStorage, added: Range<usize>) {
        if self.is_started() {
            return;
        }
        for i in added {
            let p = storage[i];
            match self.bounds.as_mut() {
                Some(b) => b.include(p),
                None => self.bounds = Some(Bounds::from_point(p)),
            }
        }
    }

    pub fn start(&mut self, now: Duration) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
            self.now = now;
        }
    }

    pub fn on_time_tick(&mut self, now: Duration) {
        self.now = now;
        if let Some(shadow) = self.shadow.as_mut() {
            shadow.on_time_tick(now);
            return;
        }
        if !self.is_started() || self.progress() < self.params.shadow_trigger_progress {
            return;
        }
        if let Some(bounds) = self.bounds {
            log::debug!("[rect] shadow triggered at {:?}", now);
            let mut shadow = ShadowRectAnimator::new(self.shadow_params.clone(), bounds);
            shadow.start(now);
            self.shadow = Some(shadow);
        }
    }

    /// Current corner geometry, `None` before start or for a box without
    /// area.
    pub fn frame(&self) -> Option<RectFrame> {
        let b = self.bounds?;
        if !self.is_started() {
            return None;
        }
        let (w, h) = (b.width(), b.height());
        if w <= 0.0 || h <= 0.0 {
            return None;
        }

        let progress = self.progress();
        let half = Vec2::new(w, h) * 0.5;
        let corner = half.min_element() / self.params.corner_length_divisor;
        let reach = (Vec2::splat(corner) + (half - Vec2::splat(corner)) * progress).min(half);

        let (l, r) = (b.left, b.right);
        Some(RectFrame {
            center: b.center(),
            left_top: ConicFragment {
                p0: Vec2::new(l.x, l.y + reach.y),
                p1: l,
                p2: Vec2::new(l.x + reach.x, l.y),
            },
            right_top: ConicFragment {
                p0: Vec2::new(r.x, l.y + reach.y),
                p1: Vec2::new(r.x, l.y),
                p2: Vec2::new(r.x - reach.x, l.y),
            },
            left_bottom: ConicFragment {
                p0: Vec2::new(l.x, r.y - reach.y),
                p1: Vec2::new(l.x, r.y),
                p2: Vec2::new(l.x + reach.x, r.y),
            },
            right_bottom: ConicFragment {
                p0: Vec2::new(r.x, r.y - reach.y),
                p1: r,
                p2: Vec2::new(r.x - reach.x, r.y),
            },
            progress,
        })
    }

    pub fn on_draw(&self, mut draw: impl FnMut(&RectFrame)) {
        if let Some(frame) = self.frame() {
            draw(&frame);
        }
    }
}

/// Two nested rectangles around the bounding box whose alphas fade linearly
/// over the shadow animation. Past its duration the alphas hold their end
/// values.
pub struct ShadowRectAnimator {
    params: ShadowParams,
    bounds: Bounds,
    start_time: Option<Duration>,
    now: Duration,
}

impl ShadowRectAnimator {
    pub fn new(params: ShadowParams, bounds: Bounds) -> Self {
        Self {
            params,
            bounds,
            start_time: None,
            now: Duration::ZERO,
        }
    }

    pub fn start(&mut self, now: Duration) {
        self.start_time = Some(now);
        self.now = now;
    }

    pub fn on_time_tick(&mut self, now: Duration) {
        self.now = now;
    }

    pub fn progress(&self) -> f32 {
        self.start_time.map_or(0.0, |start| {
            elapsed_fraction(start, self.now, self.params.animation_ttl)
        })
    }

    pub fn is_finished(&self) -> bool {
        self.start_time.is_some() && self.progress() >= 1.0
    }

    /// `(out_rect, in_rect)` at the current time.
    pub fn rects(&self) -> Option<(ShadowRect, ShadowRect)> {
        self.start_time?;
        let t = self.progress();
        let make = |margin: f32, (from, to): (f32, f32)| {
            let b = self.bounds.inflate(margin);
            ShadowRect {
                top_left: b.left,
                bottom_right: b.right,
                alpha: from + (to - from) * t,
            }
        };
        Some((
            make(self.params.out_margin, self.params.out_alpha),
            make(self.params.in_margin, self.params.in_alpha),
        ))
    }

    pub fn on_draw(&self, mut draw: impl FnMut(&ShadowRect, &ShadowRect)) {
        if let Some((out_rect, in_rect)) = self.rects() {
            draw(&out_rect, &in_rect);
        }
    }
}
