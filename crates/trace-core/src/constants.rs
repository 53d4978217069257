use std::time::Duration;

// Default tuning constants for the light-trace effects. Runtime overrides go
// through `EffectParams`; these are only the values it starts from.

// Sparks
pub const SPARK_MIN_RADIUS: f32 = 1.0;
pub const SPARK_MAX_RADIUS: f32 = 3.0;
pub const SPARK_TTL: Duration = Duration::from_millis(1000); // time to live for one spark
pub const SPARK_CREATE_INTERVAL: Duration = Duration::from_millis(50); // one spark per interval
pub const SPARK_CREATE_DEFAULT_CNT: usize = 10; // burst size for a cluster without sparks
pub const SPARK_JITTER_SPEED: f32 = 0.05; // px/ms, random velocity in [-max, max] per axis

// Clusters
pub const CLUSTER_RADIUS: f32 = 20.0; // no new cluster closer than this to the previous one
pub const CLUSTER_TTL: Duration = Duration::from_millis(1000);
pub const CLUSTER_JITTER_SPEED: f32 = 0.005; // px/ms drift for clusters off the tip
pub const FINGER_VELOCITY_DIVISOR: f32 = 60.0; // empirical scale for the trailing effect
pub const MIN_VELOCITY_DT: Duration = Duration::from_millis(16); // clamp for cluster dt

// Lazer
pub const SEGMENT_TTL: Duration = Duration::from_millis(800);
pub const SEGMENT_MAX_WIDTH: f32 = 20.0;
pub const MIN_DISTANCE_TO_ADD: f32 = 0.0;

// Gradient ribbon (packed ARGB)
pub const GRADIENT_START: u32 = 0xFFFF_0000; // red
pub const GRADIENT_MIDDLE: u32 = 0xFFFF_FF00; // yellow
pub const GRADIENT_END: u32 = 0xFF00_00FF; // blue
pub const GRADIENT_SEGMENT_WIDTH: f32 = 20.0;

// Completion rectangle
pub const ANIMATION_TTL: Duration = Duration::from_millis(1400);
pub const CORNER_LENGTH_DIVISOR: f32 = 4.0; // corner = min(halfW, halfH) / divisor
pub const SHADOW_TRIGGER_PROGRESS: f32 = 0.9;

// Shadow rectangle
pub const SHADOW_RECT_ANIMATION_TTL: Duration = Duration::from_millis(600);
pub const SHADOW_OUT_MARGIN: f32 = 16.0;
pub const SHADOW_IN_MARGIN: f32 = 6.0;
pub const SHADOW_OUT_ALPHA_START: f32 = 0.45;
pub const SHADOW_OUT_ALPHA_END: f32 = 0.0;
pub const SHADOW_IN_ALPHA_START: f32 = 0.85;
pub const SHADOW_IN_ALPHA_END: f32 = 0.25;

// Input sampling
pub const MIN_SAMPLE_DISTANCE: f32 = 10.0; // pointer moves shorter than this are dropped

/// Milliseconds as `f32`, the unit all decay and velocity math is done in.
#[inline]
pub fn millis_f32(d: Duration) -> f32 {
    (d.as_secs_f64() * 1000.0) as f32
}
