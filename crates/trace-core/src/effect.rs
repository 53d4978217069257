//! Orchestrator owning the point history and all five effects of a trace.

use std::time::Duration;

use crate::geometry::{Point, RectFrame, ShadowRect};
use crate::gradient::{Argb, GradientTrace};
use crate::lazer::LazerTrace;
use crate::params::EffectParams;
use crate::rect::RectAnimator;
use crate::spark::ClusterStorage;
use crate::storage::PointStorage;

/// Where a trace is in its pointer-down to animation-done lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Pointer is down; points are accepted.
    Recording,
    /// Pointer released; the rectangle is still growing.
    Completing,
    /// Rectangle fully grown (or nothing was recorded).
    Completed,
}

/// Render-side sink for the drawables of one frame.
///
/// Every call happens synchronously inside [`PathLightEffect::draw`]; the
/// arguments are not retained by the core afterwards.
pub trait EffectPainter {
    fn gradient_segment(&mut self, _p1: Point, _c1: Argb, _p2: Point, _c2: Argb, _width: f32) {}
    /// `start == end` marks the laser head.
    fn lazer_segment(&mut self, _start: Point, _end: Point, _width: f32) {}
    fn spark(&mut self, _radius: f32, _position: Point) {}
    fn rect(&mut self, _frame: &RectFrame) {}
    fn shadow_rect(&mut self, _out_rect: &ShadowRect, _in_rect: &ShadowRect) {}
}

pub struct PathLightEffect {
    params: EffectParams,
    storage: PointStorage,
    clusters: ClusterStorage,
    lazer: LazerTrace,
    gradient: GradientTrace,
    rect: RectAnimator,
    lifecycle: Lifecycle,
}

impl PathLightEffect {
    pub fn new(params: EffectParams, seed: u64) -> Self {
        Self {
            storage: PointStorage::new(),
            clusters: ClusterStorage::new(params.sparks.clone(), seed),
            lazer: LazerTrace::new(params.lazer.clone()),
            gradient: GradientTrace::new(params.gradient.clone()),
            rect: RectAnimator::new(params.rect.clone(), params.shadow.clone()),
            lifecycle: Lifecycle::Recording,
            params,
        }
    }

    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn storage(&self) -> &PointStorage {
        &self.storage
    }

    pub fn path_points(&self) -> &[Point] {
        self.storage.path_points()
    }

    pub fn clusters(&self) -> &ClusterStorage {
        &self.clusters
    }

    pub fn lazer(&self) -> &LazerTrace {
        &self.lazer
    }

    pub fn gradient(&self) -> &GradientTrace {
        &self.gradient
    }

    pub fn rect(&self) -> &RectAnimator {
        &self.rect
    }

    /// Append samples of the current trace. Ignored once the trace was
    /// completed.
    pub fn add_points(&mut self, now: Duration, points: &[Point]) {
        if self.lifecycle != Lifecycle::Recording {
            log::trace!(
                "[trace] dropping {} points in {:?}",
                points.len(),
                self.lifecycle
            );
            return;
        }
        self.append(now, points);
    }

    fn append(&mut self, now: Duration, points: &[Point]) {
        let added = self.storage.add_points(points);
        if added.is_empty() {
            return;
        }
        self.clusters
            .on_points_added(&self.storage, now, added.clone());
        self.lazer.on_points_added(&self.storage, now, added.clone());
        self.rect.on_points_added(&self.storage, added);
    }

    /// Pointer released: close the loop, stop refreshing the live tip and
    /// start the rectangle animation.
    pub fn complete(&mut self, now: Duration) {
        if self.lifecycle != Lifecycle::Recording {
            return;
        }
        if self.params.close_loop && self.storage.len() >= 2 {
            if let (Some(first), Some(last)) = (self.storage.first(), self.storage.last()) {
                if first != last {
                    self.append(now, &[first]);
                }
            }
        }
        self.clusters.on_complete();
        self.lazer.on_complete(now);

        if self.storage.is_empty() {
            self.lifecycle = Lifecycle::Completed;
        } else {
            self.rect.start(now);
            self.lifecycle = Lifecycle::Completing;
        }
        log::debug!(
            "[trace] complete: {} points, length {:.1}",
            self.storage.len(),
            self.storage.path_length()
        );
    }

    pub fn tick(&mut self, now: Duration) {
        self.clusters.on_time_tick(&self.storage, now);
        self.lazer.on_time_tick(now);
        self.rect.on_time_tick(now);

        if self.lifecycle == Lifecycle::Completing && self.rect.is_finished() {
            self.lifecycle = Lifecycle::Completed;
            log::debug!("[trace] completion animation finished");
        }
    }

    pub fn draw<P: EffectPainter + ?Sized>(&self, painter: &mut P) {
        if self.storage.is_empty() {
            return;
        }
        self.gradient
            .on_draw(&self.storage, |p1, c1, p2, c2, w| {
                painter.gradient_segment(p1, c1, p2, c2, w)
            });
        self.lazer
            .on_draw(&self.storage, |a, b, w| painter.lazer_segment(a, b, w));
        self.clusters
            .on_draw(|s, pos| painter.spark(s.radius(), pos));
        self.rect.on_draw(|frame| painter.rect(frame));
        if let Some(shadow) = self.rect.shadow() {
            shadow.on_draw(|out_rect, in_rect| painter.shadow_rect(out_rect, in_rect));
        }
    }
}
