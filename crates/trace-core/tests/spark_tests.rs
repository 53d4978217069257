// Host-side tests for sparks, clusters and the cluster storage.

use std::time::Duration;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trace_core::constants::*;
use trace_core::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn spark_alive_strictly_before_ttl() {
    let params = SparkParams::default();
    let t0 = ms(250);
    let spark = Spark::new(Vec2::ZERO, Vec2::new(0.1, 0.0), 2.0, t0, params.spark_ttl);
    let ttl_ms = params.spark_ttl.as_millis() as u64;
    for dt in [0, 1, 500, ttl_ms - 1] {
        assert!(spark.is_alive(t0 + ms(dt)), "expected alive at +{dt}ms");
    }
    assert!(!spark.is_alive(t0 + params.spark_ttl));
    assert!(!spark.is_alive(t0 + params.spark_ttl + ms(1)));
}

#[test]
fn spark_moves_linearly() {
    let spark = Spark::new(Vec2::new(10.0, 20.0), Vec2::new(0.5, -0.25), 1.0, ms(100), ms(1000));
    assert_eq!(spark.position(ms(100)), Vec2::new(10.0, 20.0));
    let p = spark.position(ms(300));
    assert!((p - Vec2::new(110.0, -30.0)).length() < 1e-4);
}

#[test]
fn fresh_cluster_burst_scaled_by_age() {
    let params = SparkParams::default();
    let cluster = SparkCluster::new(ms(0), 0);
    // 10 * (1 - 50 / 1000) = 9.5, truncated
    let expected = (SPARK_CREATE_DEFAULT_CNT as f32 * 0.95) as usize;
    assert_eq!(cluster.should_create_spark(ms(50), &params), expected);
    assert_eq!(expected, 9);
    assert_eq!(
        cluster.should_create_spark(ms(0), &params),
        SPARK_CREATE_DEFAULT_CNT
    );
}

#[test]
fn cluster_waits_for_interval_between_sparks() {
    let params = SparkParams::default();
    let storage = {
        let mut s = PointStorage::new();
        s.add_points(&[Vec2::new(5.0, 5.0)]);
        s
    };
    let mut rng = StdRng::seed_from_u64(1);
    let mut cluster = SparkCluster::new(ms(0), 0);
    cluster.create_sparks(3, storage[0], ms(0), Vec2::ZERO, &params, &mut rng);
    assert_eq!(cluster.sparks().len(), 3);

    assert_eq!(cluster.should_create_spark(ms(49), &params), 0);
    // two intervals elapsed at 10% age -> 2 * 0.9 = 1.8 -> 1
    assert_eq!(cluster.should_create_spark(ms(100), &params), 1);
}

#[test]
fn spawned_sparks_respect_radius_and_speed_bounds() {
    let params = SparkParams::default();
    let mut rng = StdRng::seed_from_u64(99);
    let mut cluster = SparkCluster::new(ms(0), 0);
    let finger = Vec2::new(0.2, -0.1);
    cluster.create_sparks(200, Vec2::ZERO, ms(0), finger, &params, &mut rng);
    for s in cluster.sparks() {
        assert!(s.radius() >= params.min_radius && s.radius() <= params.max_radius);
        let v = s.velocity();
        let max = (params.jitter_speed + finger.abs().max_element()) * 0.5 + 1e-6;
        assert!(v.x.abs() <= max && v.y.abs() <= max, "velocity {v:?}");
    }
}

#[test]
fn nearby_points_share_one_cluster() {
    let mut storage = PointStorage::new();
    let pts: Vec<Vec2> = (0..30)
        .map(|i| Vec2::new(100.0 + (i % 5) as f32 * 2.0, 100.0 + (i / 5) as f32 * 1.5))
        .collect();
    let range = storage.add_points(&pts);

    let mut clusters = ClusterStorage::new(SparkParams::default(), 3);
    clusters.on_points_added(&storage, ms(0), range);
    assert_eq!(clusters.clusters().len(), 1);
    assert_eq!(clusters.clusters()[0].position_index(), 0);
}

#[test]
fn distant_points_create_new_clusters() {
    let mut storage = PointStorage::new();
    let range = storage.add_points(&[
        Vec2::new(0.0, 0.0),
        Vec2::new(5.0, 0.0),
        Vec2::new(25.0, 0.0),
        Vec2::new(30.0, 0.0),
        Vec2::new(60.0, 0.0),
    ]);
    let mut clusters = ClusterStorage::new(SparkParams::default(), 3);
    clusters.on_points_added(&storage, ms(0), range);
    let anchors: Vec<usize> = clusters
        .clusters()
        .iter()
        .map(|c| c.position_index())
        .collect();
    assert_eq!(anchors, vec![0, 2, 4]);
}

#[test]
fn live_tip_cluster_survives_while_recording() {
    let mut storage = PointStorage::new();
    let range = storage.add_points(&[Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0)]);
    let mut clusters = ClusterStorage::new(SparkParams::default(), 11);
    clusters.on_points_added(&storage, ms(0), range);
    assert_eq!(clusters.clusters().len(), 2);

    for t in (0..=3000).step_by(100) {
        clusters.on_time_tick(&storage, ms(t));
    }
    // the first cluster expired, the tip is refreshed every tick
    assert_eq!(clusters.clusters().len(), 1);
    assert_eq!(clusters.clusters()[0].position_index(), 1);
    assert_eq!(clusters.clusters()[0].creation_time(), ms(3000));
}

#[test]
fn clusters_expire_after_complete() {
    let mut storage = PointStorage::new();
    let range = storage.add_points(&[Vec2::new(0.0, 0.0)]);
    let mut clusters = ClusterStorage::new(SparkParams::default(), 11);
    clusters.on_points_added(&storage, ms(0), range);
    clusters.on_time_tick(&storage, ms(500));
    clusters.on_complete();
    clusters.on_time_tick(&storage, ms(1400));
    assert_eq!(clusters.clusters().len(), 1);
    clusters.on_time_tick(&storage, ms(1500));
    assert!(clusters.clusters().is_empty());
}

#[test]
fn draw_reports_live_sparks_only_while_recording() {
    let mut storage = PointStorage::new();
    let range = storage.add_points(&[Vec2::new(10.0, 10.0)]);
    let mut clusters = ClusterStorage::new(SparkParams::default(), 5);
    clusters.on_points_added(&storage, ms(0), range);
    clusters.on_time_tick(&storage, ms(0));

    let mut drawn = Vec::new();
    clusters.on_draw(|s, pos| drawn.push((s.radius(), pos)));
    assert_eq!(drawn.len(), SPARK_CREATE_DEFAULT_CNT);
    assert!(drawn.iter().all(|(_, p)| *p == Vec2::new(10.0, 10.0)));

    clusters.on_complete();
    let mut after = 0;
    clusters.on_draw(|_, _| after += 1);
    assert_eq!(after, 0);
}

#[test]
fn sparks_are_pruned_after_ttl() {
    let mut storage = PointStorage::new();
    let range = storage.add_points(&[Vec2::ZERO]);
    let mut clusters = ClusterStorage::new(SparkParams::default(), 5);
    clusters.on_points_added(&storage, ms(0), range);
    clusters.on_time_tick(&storage, ms(0));
    let first_burst = clusters.clusters()[0].sparks().len();
    assert_eq!(first_burst, SPARK_CREATE_DEFAULT_CNT);

    clusters.on_time_tick(&storage, ms(500));
    clusters.on_time_tick(&storage, ms(1000));
    let sparks = clusters.clusters()[0].sparks();
    assert!(!sparks.is_empty());
    // the initial burst is gone
    assert!(sparks.iter().all(|s| s.creation_time() >= ms(500)));
}

#[test]
fn same_seed_gives_same_sparks() {
    let run = |seed| {
        let mut storage = PointStorage::new();
        let mut clusters = ClusterStorage::new(SparkParams::default(), seed);
        let mut out = Vec::new();
        for step in 0..10u64 {
            let r = storage.add_points(&[Vec2::new(step as f32 * 30.0, 0.0)]);
            clusters.on_points_added(&storage, ms(step * 16), r);
            clusters.on_time_tick(&storage, ms(step * 16));
        }
        clusters.on_draw(|s, p| out.push((s.radius(), p)));
        out
    };
    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(43));
}

/// Three clusters 100 px apart along x, created `step` apart; returns the
/// sparks of the newest one.
fn newest_cluster_sparks(step: u64) -> Vec<Spark> {
    let params = SparkParams {
        jitter_speed: 0.0,
        ..Default::default()
    };
    let mut storage = PointStorage::new();
    let mut clusters = ClusterStorage::new(params, 11);
    for i in 0..3u64 {
        let now = ms(i * step);
        let r = storage.add_points(&[Vec2::new(i as f32 * 100.0, 0.0)]);
        clusters.on_points_added(&storage, now, r);
        clusters.on_time_tick(&storage, now);
    }
    assert_eq!(clusters.clusters().len(), 3);
    clusters.clusters()[2].sparks().iter().cloned().collect()
}

#[test]
fn newest_cluster_sparks_trail_the_finger() {
    let sparks = newest_cluster_sparks(100);
    assert_eq!(sparks.len(), SPARK_CREATE_DEFAULT_CNT);
    // 100 px over 100 ms, divided by 60, halved with zero jitter
    let expected = 100.0 / 100.0 / FINGER_VELOCITY_DIVISOR * 0.5;
    for s in &sparks {
        let v = s.velocity();
        assert!((v.x - expected).abs() < 1e-6, "vx {} != {expected}", v.x);
        assert!(v.y.abs() < 1e-6);
    }
}

#[test]
fn finger_velocity_dt_is_clamped() {
    let sparks = newest_cluster_sparks(5);
    assert!(!sparks.is_empty());
    let clamp_ms = MIN_VELOCITY_DT.as_millis() as f32;
    let expected = 100.0 / clamp_ms / FINGER_VELOCITY_DIVISOR * 0.5;
    for s in &sparks {
        assert!((s.velocity().x - expected).abs() < 1e-6, "vx {}", s.velocity().x);
    }
}
