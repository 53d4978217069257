// Host-side tests for the capsule painter.
// The front-end is a binary, so the pure painter module is included directly.

#![allow(dead_code)]
mod painter {
    include!("../src/painter.rs");
}

use std::time::Duration;

use glam::Vec2;
use painter::{CapsulePainter, Instance};
use trace_core::*;

#[test]
fn instance_layout_matches_shader() {
    assert_eq!(std::mem::size_of::<Instance>(), 64);
}

#[test]
fn zero_width_laser_is_skipped() {
    let mut p = CapsulePainter::default();
    p.lazer_segment(Vec2::ZERO, Vec2::ONE, 0.0);
    assert!(p.instances().is_empty());
    p.lazer_segment(Vec2::ZERO, Vec2::ONE, 8.0);
    // glow and core
    assert_eq!(p.instances().len(), 2);
    assert_eq!(p.instances()[0].shape[0], 4.0);
}

#[test]
fn gradient_segment_keeps_end_colors() {
    let mut p = CapsulePainter::default();
    p.gradient_segment(
        Vec2::ZERO,
        Argb(0xFFFF_0000),
        Vec2::new(10.0, 0.0),
        Argb(0xFF00_00FF),
        20.0,
    );
    let inst = p.instances()[0];
    assert_eq!(inst.p1, [10.0, 0.0]);
    assert_eq!(&inst.color0[..3], &[1.0, 0.0, 0.0]);
    assert_eq!(&inst.color1[..3], &[0.0, 0.0, 1.0]);
    assert_eq!(inst.shape[0], 10.0);
}

#[test]
fn spark_is_a_dot() {
    let mut p = CapsulePainter::default();
    p.spark(2.5, Vec2::new(3.0, 4.0));
    let inst = p.instances()[0];
    assert_eq!(inst.p0, inst.p1);
    assert_eq!(inst.shape[0], 2.5);
}

#[test]
fn completed_trace_becomes_capsules() {
    let mut effect = PathLightEffect::new(EffectParams::default(), 3);
    effect.add_points(
        Duration::ZERO,
        &[
            Vec2::new(0.0, 0.0),
            Vec2::new(200.0, 0.0),
            Vec2::new(200.0, 120.0),
        ],
    );
    effect.complete(Duration::from_millis(100));
    effect.tick(Duration::from_millis(1500));

    let mut p = CapsulePainter::default();
    effect.draw(&mut p);
    let n = p.instances().len();
    // 3 ribbon segments, 4 corners of 12 steps, 2 outlines of 4 edges
    assert!(n >= 3 + 48 + 8, "only {n} capsules");

    p.clear();
    assert!(p.instances().is_empty());
}
