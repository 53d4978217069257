// Host-side tests for the completion rectangle and its shadow.

use std::time::Duration;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trace_core::constants::*;
use trace_core::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn animator_over(points: &[Vec2]) -> (PointStorage, RectAnimator) {
    let mut storage = PointStorage::new();
    let mut rect = RectAnimator::new(RectParams::default(), ShadowParams::default());
    let range = storage.add_points(points);
    rect.on_points_added(&storage, range);
    (storage, rect)
}

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn incremental_bounds_match_batch_min_max() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..25 {
        let points: Vec<Vec2> = (0..rng.gen_range(1..40))
            .map(|_| Vec2::new(rng.gen_range(-300.0..300.0), rng.gen_range(-300.0..300.0)))
            .collect();

        let mut storage = PointStorage::new();
        let mut rect = RectAnimator::new(RectParams::default(), ShadowParams::default());
        let mut rest = points.as_slice();
        while !rest.is_empty() {
            let take = rng.gen_range(1..=rest.len());
            let range = storage.add_points(&rest[..take]);
            rect.on_points_added(&storage, range);
            rest = &rest[take..];
        }

        let min = points.iter().copied().reduce(Vec2::min).unwrap();
        let max = points.iter().copied().reduce(Vec2::max).unwrap();
        let b = rect.bounds().unwrap();
        assert_eq!((b.left, b.right), (min, max));
    }
}

#[test]
fn bounds_freeze_once_started() {
    let (mut storage, mut rect) = animator_over(&[Vec2::ZERO, Vec2::new(10.0, 10.0)]);
    rect.start(ms(0));
    let range = storage.add_points(&[Vec2::new(500.0, -500.0)]);
    rect.on_points_added(&storage, range);
    assert_eq!(rect.bounds().unwrap().right, Vec2::new(10.0, 10.0));
}

#[test]
fn no_frame_before_start() {
    let (_, rect) = animator_over(&[Vec2::ZERO, Vec2::new(100.0, 40.0)]);
    assert!(rect.frame().is_none());
    assert_eq!(rect.progress(), 0.0);
    assert!(!rect.is_finished());
}

#[test]
fn corners_grow_from_corner_length_to_midlines() {
    let (_, mut rect) = animator_over(&[Vec2::ZERO, Vec2::new(100.0, 40.0)]);
    rect.start(ms(1000));

    let frame = rect.frame().unwrap();
    assert_eq!(frame.progress, 0.0);
    assert_eq!(frame.center, Vec2::new(50.0, 20.0));
    // corner length is min(50, 20) / 4
    assert!(close(frame.left_top.p0, Vec2::new(0.0, 5.0)));
    assert!(close(frame.left_top.p1, Vec2::ZERO));
    assert!(close(frame.left_top.p2, Vec2::new(5.0, 0.0)));
    assert!(close(frame.right_bottom.p0, Vec2::new(100.0, 35.0)));
    assert!(close(frame.right_bottom.p2, Vec2::new(95.0, 40.0)));

    rect.on_time_tick(ms(1000) + ANIMATION_TTL);
    let frame = rect.frame().unwrap();
    assert_eq!(frame.progress, 1.0);
    assert!(rect.is_finished());
    for corner in frame.corners() {
        assert!((corner.p0.y - 20.0).abs() < 1e-4, "{corner:?}");
        assert!((corner.p2.x - 50.0).abs() < 1e-4, "{corner:?}");
    }
}

#[test]
fn corner_reach_never_shrinks() {
    let (_, mut rect) = animator_over(&[Vec2::new(-30.0, 10.0), Vec2::new(90.0, 200.0)]);
    rect.start(ms(0));
    let mut last = 0.0;
    for t in (0..=1600).step_by(40) {
        rect.on_time_tick(ms(t));
        let f = rect.frame().unwrap();
        let reach = f.left_top.p2.x - f.left_top.p1.x;
        assert!(reach >= last);
        last = reach;
    }
}

#[test]
fn conic_fragment_interpolates_endpoints() {
    let c = ConicFragment {
        p0: Vec2::new(0.0, 10.0),
        p1: Vec2::ZERO,
        p2: Vec2::new(10.0, 0.0),
    };
    assert_eq!(c.point_at(0.0), c.p0);
    assert_eq!(c.point_at(1.0), c.p2);
    assert!(close(c.point_at(0.5), Vec2::new(2.5, 2.5)));
}

#[test]
fn degenerate_box_has_no_frame() {
    let (_, mut rect) = animator_over(&[Vec2::new(5.0, 5.0), Vec2::new(50.0, 5.0)]);
    rect.start(ms(0));
    rect.on_time_tick(ms(700));
    assert!(rect.frame().is_none());
}

#[test]
fn shadow_starts_near_end_of_growth() {
    let (_, mut rect) = animator_over(&[Vec2::ZERO, Vec2::new(100.0, 40.0)]);
    rect.start(ms(0));
    rect.on_time_tick(ms(1200));
    assert!(rect.shadow().is_none());
    rect.on_time_tick(ms(1270));
    let shadow = rect.shadow().unwrap();
    assert_eq!(shadow.progress(), 0.0);

    let (out_rect, in_rect) = shadow.rects().unwrap();
    assert_eq!(out_rect.top_left, Vec2::splat(-SHADOW_OUT_MARGIN));
    assert_eq!(out_rect.bottom_right, Vec2::new(116.0, 56.0));
    assert_eq!(in_rect.top_left, Vec2::splat(-SHADOW_IN_MARGIN));
    assert_eq!(out_rect.alpha, SHADOW_OUT_ALPHA_START);
    assert_eq!(in_rect.alpha, SHADOW_IN_ALPHA_START);
}

#[test]
fn shadow_alpha_fades_and_holds() {
    let bounds = Bounds {
        left: Vec2::ZERO,
        right: Vec2::new(10.0, 10.0),
    };
    let mut shadow = ShadowRectAnimator::new(ShadowParams::default(), bounds);
    assert!(shadow.rects().is_none());
    shadow.start(ms(100));

    shadow.on_time_tick(ms(400));
    let (out_rect, in_rect) = shadow.rects().unwrap();
    assert!((out_rect.alpha - 0.225).abs() < 1e-5);
    assert!((in_rect.alpha - 0.55).abs() < 1e-5);

    shadow.on_time_tick(ms(100) + SHADOW_RECT_ANIMATION_TTL);
    assert!(shadow.is_finished());
    shadow.on_time_tick(ms(5000));
    let (out_rect, in_rect) = shadow.rects().unwrap();
    assert!((out_rect.alpha - SHADOW_OUT_ALPHA_END).abs() < 1e-6);
    assert!((in_rect.alpha - SHADOW_IN_ALPHA_END).abs() < 1e-6);
}
