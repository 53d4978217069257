//! Runtime tuning for the five effects.
//!
//! Every group defaults to the values in [`crate::constants`]. Front-ends
//! tweak individual fields and hand the whole [`EffectParams`] to
//! [`crate::TraceSession::new`], which validates it once up front.

use std::time::Duration;

use crate::constants::*;
use crate::error::ParamsError;
use crate::gradient::Argb;

/// Spark and cluster emission parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SparkParams {
    pub min_radius: f32,
    pub max_radius: f32,
    pub spark_ttl: Duration,
    pub create_interval: Duration,
    pub default_count: usize,
    pub jitter_speed: f32,
    pub cluster_radius: f32,
    pub cluster_ttl: Duration,
    pub cluster_jitter_speed: f32,
    pub finger_velocity_divisor: f32,
    pub min_velocity_dt: Duration,
}

impl Default for SparkParams {
    fn default() -> Self {
        Self {
            min_radius: SPARK_MIN_RADIUS,
            max_radius: SPARK_MAX_RADIUS,
            spark_ttl: SPARK_TTL,
            create_interval: SPARK_CREATE_INTERVAL,
            default_count: SPARK_CREATE_DEFAULT_CNT,
            jitter_speed: SPARK_JITTER_SPEED,
            cluster_radius: CLUSTER_RADIUS,
            cluster_ttl: CLUSTER_TTL,
            cluster_jitter_speed: CLUSTER_JITTER_SPEED,
            finger_velocity_divisor: FINGER_VELOCITY_DIVISOR,
            min_velocity_dt: MIN_VELOCITY_DT,
        }
    }
}

/// Laser stroke parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct LazerParams {
    pub segment_ttl: Duration,
    pub max_width: f32,
    pub min_distance_to_add: f32,
}

impl Default for LazerParams {
    fn default() -> Self {
        Self {
            segment_ttl: SEGMENT_TTL,
            max_width: SEGMENT_MAX_WIDTH,
            min_distance_to_add: MIN_DISTANCE_TO_ADD,
        }
    }
}

/// Three-stop color ramp keyed at 0, L/2 and L.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientParams {
    pub stops: [Argb; 3],
    pub width: f32,
}

impl Default for GradientParams {
    fn default() -> Self {
        Self {
            stops: [
                Argb(GRADIENT_START),
                Argb(GRADIENT_MIDDLE),
                Argb(GRADIENT_END),
            ],
            width: GRADIENT_SEGMENT_WIDTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectParams {
    pub animation_ttl: Duration,
    pub corner_length_divisor: f32,
    pub shadow_trigger_progress: f32,
}

impl Default for RectParams {
    fn default() -> Self {
        Self {
            animation_ttl: ANIMATION_TTL,
            corner_length_divisor: CORNER_LENGTH_DIVISOR,
            shadow_trigger_progress: SHADOW_TRIGGER_PROGRESS,
        }
    }
}

/// Outer/inner shadow rectangles: margins around the bounding box and the
/// alpha each one fades between.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowParams {
    pub animation_ttl: Duration,
    pub out_margin: f32,
    pub in_margin: f32,
    pub out_alpha: (f32, f32),
    pub in_alpha: (f32, f32),
}

impl Default for ShadowParams {
    fn default() -> Self {
        Self {
            animation_ttl: SHADOW_RECT_ANIMATION_TTL,
            out_margin: SHADOW_OUT_MARGIN,
            in_margin: SHADOW_IN_MARGIN,
            out_alpha: (SHADOW_OUT_ALPHA_START, SHADOW_OUT_ALPHA_END),
            in_alpha: (SHADOW_IN_ALPHA_START, SHADOW_IN_ALPHA_END),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectParams {
    pub sparks: SparkParams,
    pub lazer: LazerParams,
    pub gradient: GradientParams,
    pub rect: RectParams,
    pub shadow: ShadowParams,
    /// Append the first point again on completion so the ribbon closes.
    pub close_loop: bool,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            sparks: SparkParams::default(),
            lazer: LazerParams::default(),
            gradient: GradientParams::default(),
            rect: RectParams::default(),
            shadow: ShadowParams::default(),
            close_loop: true,
        }
    }
}

impl EffectParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        let s = &self.sparks;
        positive("sparks.spark_ttl", s.spark_ttl)?;
        positive("sparks.create_interval", s.create_interval)?;
        positive("sparks.cluster_ttl", s.cluster_ttl)?;
        positive("sparks.min_velocity_dt", s.min_velocity_dt)?;
        non_negative("sparks.min_radius", s.min_radius)?;
        non_negative("sparks.max_radius", s.max_radius)?;
        if s.min_radius > s.max_radius {
            return Err(ParamsError::InvertedRadius {
                min: s.min_radius,
                max: s.max_radius,
            });
        }
        non_negative("sparks.jitter_speed", s.jitter_speed)?;
        non_negative("sparks.cluster_radius", s.cluster_radius)?;
        non_negative("sparks.cluster_jitter_speed", s.cluster_jitter_speed)?;
        if !(s.finger_velocity_divisor.is_finite() && s.finger_velocity_divisor > 0.0) {
            return Err(ParamsError::Negative {
                name: "sparks.finger_velocity_divisor",
                value: s.finger_velocity_divisor,
            });
        }

        positive("lazer.segment_ttl", self.lazer.segment_ttl)?;
        non_negative("lazer.max_width", self.lazer.max_width)?;
        non_negative("lazer.min_distance_to_add", self.lazer.min_distance_to_add)?;

        non_negative("gradient.width", self.gradient.width)?;

        positive("rect.animation_ttl", self.rect.animation_ttl)?;
        if !(self.rect.corner_length_divisor.is_finite() && self.rect.corner_length_divisor > 0.0)
        {
            return Err(ParamsError::Negative {
                name: "rect.corner_length_divisor",
                value: self.rect.corner_length_divisor,
            });
        }
        fraction("rect.shadow_trigger_progress", self.rect.shadow_trigger_progress)?;

        let sh = &self.shadow;
        positive("shadow.animation_ttl", sh.animation_ttl)?;
        for (name, v) in [
            ("shadow.out_alpha.0", sh.out_alpha.0),
            ("shadow.out_alpha.1", sh.out_alpha.1),
            ("shadow.in_alpha.0", sh.in_alpha.0),
            ("shadow.in_alpha.1", sh.in_alpha.1),
        ] {
            non_negative(name, v)?;
            if v > 1.0 {
                return Err(ParamsError::FractionOutOfRange { name, value: v });
            }
        }
        Ok(())
    }
}

fn positive(name: &'static str, d: Duration) -> Result<(), ParamsError> {
    if d.is_zero() {
        return Err(ParamsError::ZeroDuration { name });
    }
    Ok(())
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ParamsError::Negative { name, value });
    }
    Ok(())
}

fn fraction(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(ParamsError::FractionOutOfRange { name, value });
    }
    Ok(())
}
