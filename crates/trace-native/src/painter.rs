use glam::Vec2;
use trace_core::{Argb, EffectPainter, Point, RectFrame, ShadowRect};

// Colors and sizes of the native look. The core only decides geometry,
// timing and the gradient ramp.
const GRADIENT_ALPHA: f32 = 0.85;
const LAZER_CORE: [f32; 4] = [1.0, 1.0, 1.0, 0.95];
const LAZER_GLOW: [f32; 4] = [0.35, 0.75, 1.0, 0.35];
const LAZER_GLOW_FALLOFF: f32 = 10.0;
const SPARK_COLOR: [f32; 4] = [1.0, 0.85, 0.45, 1.0];
const SPARK_GLOW_FALLOFF: f32 = 3.0;
const RECT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
const RECT_HALF_WIDTH: f32 = 1.5;
const RECT_GLOW_FALLOFF: f32 = 4.0;
const CORNER_STEPS: usize = 12; // capsules per corner curve
const SHADOW_COLOR: [f32; 3] = [0.35, 0.75, 1.0];
const SHADOW_OUT_HALF_WIDTH: f32 = 5.0;
const SHADOW_IN_HALF_WIDTH: f32 = 2.0;

/// One capsule: a segment with a radius, a color at each end and a glow
/// falloff. 64 bytes, matching the instance layout in `trace.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Instance {
    pub p0: [f32; 2],
    pub p1: [f32; 2],
    pub color0: [f32; 4],
    pub color1: [f32; 4],
    pub shape: [f32; 2], // radius, falloff
    pub _pad: [f32; 2],
}

/// Collects the frame's drawables as capsule instances.
#[derive(Default)]
pub struct CapsulePainter {
    instances: Vec<Instance>,
}

impl CapsulePainter {
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    fn capsule(
        &mut self,
        p0: Point,
        p1: Point,
        color0: [f32; 4],
        color1: [f32; 4],
        radius: f32,
        falloff: f32,
    ) {
        self.instances.push(Instance {
            p0: p0.to_array(),
            p1: p1.to_array(),
            color0,
            color1,
            shape: [radius.max(0.0), falloff],
            _pad: [0.0; 2],
        });
    }

    fn outline(&mut self, top_left: Point, bottom_right: Point, color: [f32; 4], half_width: f32) {
        let top_right = Vec2::new(bottom_right.x, top_left.y);
        let bottom_left = Vec2::new(top_left.x, bottom_right.y);
        for (a, b) in [
            (top_left, top_right),
            (top_right, bottom_right),
            (bottom_right, bottom_left),
            (bottom_left, top_left),
        ] {
            self.capsule(a, b, color, color, half_width, 1.0);
        }
    }
}

fn with_alpha(c: Argb, alpha: f32) -> [f32; 4] {
    let [r, g, b, a] = c.to_rgba_f32();
    [r, g, b, a * alpha]
}

impl EffectPainter for CapsulePainter {
    fn gradient_segment(&mut self, p1: Point, c1: Argb, p2: Point, c2: Argb, width: f32) {
        self.capsule(
            p1,
            p2,
            with_alpha(c1, GRADIENT_ALPHA),
            with_alpha(c2, GRADIENT_ALPHA),
            width * 0.5,
            1.0,
        );
    }

    fn lazer_segment(&mut self, start: Point, end: Point, width: f32) {
        if width <= 0.0 {
            return;
        }
        let r = width * 0.5;
        self.capsule(start, end, LAZER_GLOW, LAZER_GLOW, r, LAZER_GLOW_FALLOFF);
        self.capsule(start, end, LAZER_CORE, LAZER_CORE, r * 0.5, 1.0);
    }

    fn spark(&mut self, radius: f32, position: Point) {
        self.capsule(
            position,
            position,
            SPARK_COLOR,
            SPARK_COLOR,
            radius,
            SPARK_GLOW_FALLOFF,
        );
    }

    fn rect(&mut self, frame: &RectFrame) {
        for corner in frame.corners() {
            let mut prev = corner.point_at(0.0);
            for step in 1..=CORNER_STEPS {
                let next = corner.point_at(step as f32 / CORNER_STEPS as f32);
                self.capsule(
                    prev,
                    next,
                    RECT_COLOR,
                    RECT_COLOR,
                    RECT_HALF_WIDTH,
                    RECT_GLOW_FALLOFF,
                );
                prev = next;
            }
        }
    }

    fn shadow_rect(&mut self, out_rect: &ShadowRect, in_rect: &ShadowRect) {
        let [r, g, b] = SHADOW_COLOR;
        self.outline(
            out_rect.top_left,
            out_rect.bottom_right,
            [r, g, b, out_rect.alpha],
            SHADOW_OUT_HALF_WIDTH,
        );
        self.outline(
            in_rect.top_left,
            in_rect.bottom_right,
            [r, g, b, in_rect.alpha],
            SHADOW_IN_HALF_WIDTH,
        );
    }
}
