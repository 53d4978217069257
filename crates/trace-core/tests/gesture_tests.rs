// Host-side tests for turning pointer events into trace commands.

use glam::Vec2;
use trace_core::constants::MIN_SAMPLE_DISTANCE;
use trace_core::*;

#[test]
fn down_move_up_produces_one_trace() {
    let input = TraceInput::new();
    let mut gesture = GestureRecorder::default();

    gesture.pointer_down(Vec2::ZERO, &input);
    assert!(gesture.is_active());
    assert!(gesture.pointer_move(Vec2::new(MIN_SAMPLE_DISTANCE, 0.0), &input));
    assert!(gesture.pointer_move(Vec2::new(MIN_SAMPLE_DISTANCE, 25.0), &input));
    gesture.pointer_up(Vec2::new(MIN_SAMPLE_DISTANCE, 25.0), &input);
    assert!(!gesture.is_active());

    assert_eq!(
        input.take().as_slice(),
        &[
            Command::Reset,
            Command::AddPoints(vec![
                Vec2::ZERO,
                Vec2::new(MIN_SAMPLE_DISTANCE, 0.0),
                Vec2::new(MIN_SAMPLE_DISTANCE, 25.0),
            ]),
            Command::Complete,
        ]
    );
}

#[test]
fn short_moves_are_dropped() {
    let input = TraceInput::new();
    let mut gesture = GestureRecorder::new(10.0);
    gesture.pointer_down(Vec2::ZERO, &input);
    assert!(!gesture.pointer_move(Vec2::new(3.0, 4.0), &input));
    assert!(!gesture.pointer_move(Vec2::new(6.0, 6.0), &input));
    // distance is measured from the last accepted sample
    assert!(gesture.pointer_move(Vec2::new(6.0, 8.0), &input));
}

#[test]
fn moves_without_press_are_ignored() {
    let input = TraceInput::new();
    let mut gesture = GestureRecorder::default();
    assert!(!gesture.pointer_move(Vec2::new(100.0, 100.0), &input));
    gesture.pointer_up(Vec2::ZERO, &input);
    assert_eq!(input.pending(), 0);
}

#[test]
fn second_press_resets_again() {
    let input = TraceInput::new();
    let mut gesture = GestureRecorder::default();
    gesture.pointer_down(Vec2::ZERO, &input);
    gesture.pointer_up(Vec2::ZERO, &input);
    gesture.pointer_down(Vec2::new(50.0, 50.0), &input);
    let commands = input.take();
    assert_eq!(commands.len(), 5);
    assert_eq!(commands[3], Command::Reset);
}
