use crate::constants::MIN_SAMPLE_DISTANCE;
use crate::geometry::Point;
use crate::session::TraceInput;

/// Turns raw pointer down/move/up events into session commands.
///
/// Down starts a new trace at the pointer position, moves are forwarded only
/// once the pointer travelled `min_step` from the last accepted sample, and
/// up completes the trace.
#[derive(Clone, Debug)]
pub struct GestureRecorder {
    min_step: f32,
    last: Option<Point>,
    active: bool,
}

impl Default for GestureRecorder {
    fn default() -> Self {
        Self::new(MIN_SAMPLE_DISTANCE)
    }
}

impl GestureRecorder {
    pub fn new(min_step: f32) -> Self {
        Self {
            min_step,
            last: None,
            active: false,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pointer_down(&mut self, p: Point, input: &TraceInput) {
        self.active = true;
        self.last = Some(p);
        input.mark_to_reset();
        input.push_point(p);
        log::debug!("[pointer] down at ({:.1}, {:.1})", p.x, p.y);
    }

    /// Returns whether the sample was forwarded.
    pub fn pointer_move(&mut self, p: Point, input: &TraceInput) -> bool {
        if !self.active {
            return false;
        }
        if self.last.is_some_and(|last| last.distance(p) < self.min_step) {
            return false;
        }
        self.last = Some(p);
        input.push_point(p);
        true
    }

    pub fn pointer_up(&mut self, p: Point, input: &TraceInput) {
        if !self.active {
            return;
        }
        self.active = false;
        self.last = None;
        input.mark_to_complete();
        log::debug!("[pointer] up at ({:.1}, {:.1})", p.x, p.y);
    }
}
