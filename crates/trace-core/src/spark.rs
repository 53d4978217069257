//! Spark particles emitted from clusters anchored along the path.
//!
//! A cluster is created whenever the pointer has moved at least
//! `cluster_radius` away from the previous cluster. While the trace is being
//! recorded the newest cluster is kept alive by refreshing its creation time
//! every tick; older clusters decay and stop emitting as they approach
//! `cluster_ttl`. Both clusters and sparks expire in creation order, so
//! expiry is always a prefix trim of the deques.

use std::collections::VecDeque;
use std::ops::Range;
use std::time::Duration;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::millis_f32;
use crate::geometry::Point;
use crate::params::SparkParams;
use crate::storage::PointStorage;

/// A single spark flying in a straight line from where it was emitted.
#[derive(Clone, Debug, PartialEq)]
pub struct Spark {
    origin: Point,
    velocity: Vec2, // px per ms
    radius: f32,
    creation_time: Duration,
    ttl: Duration,
}

impl Spark {
    pub fn new(
        origin: Point,
        velocity: Vec2,
        radius: f32,
        creation_time: Duration,
        ttl: Duration,
    ) -> Self {
        Self {
            origin,
            velocity,
            radius,
            creation_time,
            ttl,
        }
    }

    /// `origin + velocity * (t - creation_time)`.
    pub fn position(&self, t: Duration) -> Point {
        let elapsed = millis_f32(t.saturating_sub(self.creation_time));
        self.origin + self.velocity * elapsed
    }

    #[inline]
    pub fn is_alive(&self, t: Duration) -> bool {
        t.saturating_sub(self.creation_time) < self.ttl
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn creation_time(&self) -> Duration {
        self.creation_time
    }
}

/// Emitter anchored to one index of the point storage.
#[derive(Clone, Debug)]
pub struct SparkCluster {
    creation_time: Duration,
    position_index: usize,
    sparks: VecDeque<Spark>,
}

impl SparkCluster {
    pub fn new(creation_time: Duration, position_index: usize) -> Self {
        Self {
            creation_time,
            position_index,
            sparks: VecDeque::new(),
        }
    }

    #[inline]
    pub fn is_alive(&self, t: Duration, ttl: Duration) -> bool {
        t.saturating_sub(self.creation_time) < ttl
    }

    #[inline]
    pub fn creation_time(&self) -> Duration {
        self.creation_time
    }

    #[inline]
    pub fn position_index(&self) -> usize {
        self.position_index
    }

    pub fn sparks(&self) -> &VecDeque<Spark> {
        &self.sparks
    }

    /// Keep the cluster alive; used for the one under the pointer.
    pub fn refresh(&mut self, t: Duration) {
        self.creation_time = t;
    }

    /// Whether path point `index` lies within `radius` of this cluster.
    pub fn is_near(&self, storage: &PointStorage, index: usize, radius: f32) -> bool {
        storage[index].distance(storage[self.position_index]) < radius
    }

    /// Number of sparks to emit at `now`.
    ///
    /// One spark per elapsed `create_interval` since the newest spark, or the
    /// default burst for an empty cluster, scaled by the remaining life
    /// fraction `1 - age / cluster_ttl` and truncated.
    pub fn should_create_spark(&self, now: Duration, params: &SparkParams) -> usize {
        let mut to_create = params.default_count as f32;
        if let Some(last) = self.sparks.back() {
            let passed = now.saturating_sub(last.creation_time());
            if passed < params.create_interval {
                return 0;
            }
            to_create = (millis_f32(passed) / millis_f32(params.create_interval)).floor();
        }
        let age = millis_f32(now.saturating_sub(self.creation_time));
        let fraction = 1.0 - age / millis_f32(params.cluster_ttl);
        (to_create * fraction.max(0.0)) as usize
    }

    pub fn create_sparks(
        &mut self,
        count: usize,
        origin: Point,
        now: Duration,
        cluster_velocity: Vec2,
        params: &SparkParams,
        rng: &mut StdRng,
    ) {
        for _ in 0..count {
            let radius = rng.gen_range(params.min_radius..=params.max_radius);
            let velocity = (random_velocity(rng, params.jitter_speed) + cluster_velocity) * 0.5;
            self.sparks
                .push_back(Spark::new(origin, velocity, radius, now, params.spark_ttl));
        }
    }

    pub fn prune_sparks(&mut self, t: Duration) {
        while self.sparks.front().is_some_and(|s| !s.is_alive(t)) {
            self.sparks.pop_front();
        }
    }
}

fn random_velocity(rng: &mut StdRng, max_speed: f32) -> Vec2 {
    Vec2::new(
        rng.gen_range(-max_speed..=max_speed),
        rng.gen_range(-max_speed..=max_speed),
    )
}

/// All live clusters of one trace.
pub struct ClusterStorage {
    params: SparkParams,
    clusters: VecDeque<SparkCluster>,
    now: Duration,
    complete: bool,
    rng: StdRng,
}

impl ClusterStorage {
    pub fn new(params: SparkParams, seed: u64) -> Self {
        Self {
            params,
            clusters: VecDeque::new(),
            now: Duration::ZERO,
            complete: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn clusters(&self) -> &VecDeque<SparkCluster> {
        &self.clusters
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn on_complete(&mut self) {
        self.complete = true;
    }

    /// Anchor a new cluster at every added index that is not within
    /// `cluster_radius` of the most recent cluster.
    pub fn on_points_added(&mut self, storage: &PointStorage, now: Duration, added: Range<usize>) {
        for i in added {
            let near_last = self
                .clusters
                .back()
                .is_some_and(|c| c.is_near(storage, i, self.params.cluster_radius));
            if !near_last {
                self.clusters.push_back(SparkCluster::new(now, i));
            }
        }
    }

    pub fn on_time_tick(&mut self, storage: &PointStorage, now: Duration) {
        self.now = now;

        let ttl = self.params.cluster_ttl;
        while self.clusters.front().is_some_and(|c| !c.is_alive(now, ttl)) {
            self.clusters.pop_front();
        }
        for c in self.clusters.iter_mut() {
            c.prune_sparks(now);
        }

        let n = self.clusters.len();
        if n == 0 {
            return;
        }
        if !self.complete {
            self.clusters[n - 1].refresh(now);
        }

        for i in 0..n {
            let count = self.clusters[i].should_create_spark(now, &self.params);
            if count == 0 {
                continue;
            }
            let velocity = if i == n - 1 && n > 2 {
                self.finger_velocity(storage, i)
            } else {
                random_velocity(&mut self.rng, self.params.cluster_jitter_speed)
            };
            let origin = storage[self.clusters[i].position_index()];
            self.clusters[i].create_sparks(
                count,
                origin,
                now,
                velocity,
                &self.params,
                &mut self.rng,
            );
        }
    }

    /// Displacement between the anchors of cluster `i - 1` and `i` over the
    /// time between their creations, scaled down so sparks trail the gesture.
    fn finger_velocity(&self, storage: &PointStorage, i: usize) -> Vec2 {
        let cur = &self.clusters[i];
        let prev = &self.clusters[i - 1];
        let dt = cur
            .creation_time()
            .saturating_sub(prev.creation_time())
            .max(self.params.min_velocity_dt);
        let d = storage[cur.position_index()] - storage[prev.position_index()];
        d / millis_f32(dt) / self.params.finger_velocity_divisor
    }

    /// Live sparks with their current positions. Nothing is drawn once the
    /// trace is complete.
    pub fn on_draw(&self, mut draw: impl FnMut(&Spark, Point)) {
        if self.complete {
            return;
        }
        for c in &self.clusters {
            for s in c.sparks() {
                if s.is_alive(self.now) {
                    draw(s, s.position(self.now));
                }
            }
        }
    }
}
