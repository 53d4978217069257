//! Canvas2D painter for the light trace. Glow comes from the context's
//! shadow blur; everything else is plain strokes and fills.

use std::f64::consts::TAU;

use trace_core::{Argb, EffectPainter, Point, RectFrame, ShadowRect};
use web_sys as web;

const BACKGROUND: &str = "rgb(5, 5, 10)";
const GRADIENT_ALPHA: f32 = 0.85;
const LAZER_CORE: &str = "rgba(255, 255, 255, 0.95)";
const LAZER_GLOW: &str = "rgba(90, 190, 255, 0.9)";
const LAZER_GLOW_BLUR: f64 = 18.0;
const SPARK_COLOR: &str = "rgba(255, 216, 115, 1.0)";
const SPARK_GLOW_BLUR: f64 = 6.0;
const RECT_GLOW_BLUR: f64 = 8.0;
const RECT_COLOR: &str = "rgba(255, 255, 255, 0.9)";
const RECT_LINE_WIDTH: f64 = 3.0;
const SHADOW_COLOR: &str = "rgb(90, 190, 255)";
const SHADOW_OUT_LINE_WIDTH: f64 = 10.0;
const SHADOW_IN_LINE_WIDTH: f64 = 4.0;

fn css_rgba(c: Argb, alpha: f32) -> String {
    let a = c.a() as f32 / 255.0 * alpha;
    format!("rgba({}, {}, {}, {:.3})", c.r(), c.g(), c.b(), a)
}

pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Clear to the background and reset the state the draw calls change.
    pub fn begin_frame(&self, width: f64, height: f64) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.set_shadow_blur(0.0);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, width, height);
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
    }

    fn glow(&self, color: &str, blur: f64) {
        self.ctx.set_shadow_color(color);
        self.ctx.set_shadow_blur(blur);
    }

    fn no_glow(&self) {
        self.ctx.set_shadow_blur(0.0);
    }

    fn stroke_line(&self, a: Point, b: Point) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
        ctx.stroke();
    }
}

impl EffectPainter for CanvasPainter {
    fn gradient_segment(&mut self, p1: Point, c1: Argb, p2: Point, c2: Argb, width: f32) {
        let ctx = &self.ctx;
        let gradient =
            ctx.create_linear_gradient(p1.x as f64, p1.y as f64, p2.x as f64, p2.y as f64);
        let stops = gradient
            .add_color_stop(0.0, &css_rgba(c1, GRADIENT_ALPHA))
            .and_then(|_| gradient.add_color_stop(1.0, &css_rgba(c2, GRADIENT_ALPHA)));
        if let Err(e) = stops {
            log::warn!("[render] gradient stop rejected: {:?}", e);
            return;
        }
        self.no_glow();
        ctx.set_stroke_style_canvas_gradient(&gradient);
        ctx.set_line_width(width as f64);
        self.stroke_line(p1, p2);
    }

    fn lazer_segment(&mut self, start: Point, end: Point, width: f32) {
        if width <= 0.0 {
            return;
        }
        let ctx = &self.ctx;
        self.glow(LAZER_GLOW, LAZER_GLOW_BLUR);
        ctx.set_stroke_style_str(LAZER_GLOW);
        ctx.set_line_width(width as f64);
        self.stroke_line(start, end);

        ctx.set_stroke_style_str(LAZER_CORE);
        ctx.set_line_width(width as f64 * 0.5);
        self.stroke_line(start, end);
        self.no_glow();
    }

    fn spark(&mut self, radius: f32, position: Point) {
        let ctx = &self.ctx;
        self.glow(SPARK_COLOR, SPARK_GLOW_BLUR);
        ctx.set_fill_style_str(SPARK_COLOR);
        ctx.begin_path();
        match ctx.arc(position.x as f64, position.y as f64, radius as f64, 0.0, TAU) {
            Ok(()) => ctx.fill(),
            Err(e) => log::warn!("[render] spark arc rejected: {:?}", e),
        }
        self.no_glow();
    }

    fn rect(&mut self, frame: &RectFrame) {
        let ctx = &self.ctx;
        self.glow(RECT_COLOR, RECT_GLOW_BLUR);
        ctx.set_stroke_style_str(RECT_COLOR);
        ctx.set_line_width(RECT_LINE_WIDTH);
        ctx.begin_path();
        for corner in frame.corners() {
            ctx.move_to(corner.p0.x as f64, corner.p0.y as f64);
            ctx.quadratic_curve_to(
                corner.p1.x as f64,
                corner.p1.y as f64,
                corner.p2.x as f64,
                corner.p2.y as f64,
            );
        }
        ctx.stroke();
        self.no_glow();
    }

    fn shadow_rect(&mut self, out_rect: &ShadowRect, in_rect: &ShadowRect) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(SHADOW_COLOR);
        for (r, line_width) in [
            (out_rect, SHADOW_OUT_LINE_WIDTH),
            (in_rect, SHADOW_IN_LINE_WIDTH),
        ] {
            let size = r.bottom_right - r.top_left;
            ctx.set_global_alpha(r.alpha as f64);
            ctx.set_line_width(line_width);
            ctx.stroke_rect(
                r.top_left.x as f64,
                r.top_left.y as f64,
                size.x as f64,
                size.y as f64,
            );
        }
        ctx.set_global_alpha(1.0);
    }
}
