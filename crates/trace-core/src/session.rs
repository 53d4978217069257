//! Hand-off between the input producer and the render/tick loop.
//!
//! The input side only ever touches a [`TraceInput`]: a cloneable handle to
//! one mutex-protected queue of tagged commands. The render side owns the
//! [`TraceSession`], swaps the whole queue out under the lock once per frame
//! and applies the commands in arrival order without holding the lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use smallvec::SmallVec;

use crate::effect::{EffectPainter, PathLightEffect};
use crate::error::ParamsError;
use crate::geometry::Point;
use crate::params::EffectParams;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    AddPoints(Vec<Point>),
    /// Discard the current trace and start a new one.
    Reset,
    /// Pointer released.
    Complete,
}

pub type CommandBatch = SmallVec<[Command; 4]>;

/// Producer handle; cheap to clone and safe to move to another thread.
#[derive(Clone, Default)]
pub struct TraceInput {
    queue: Arc<Mutex<CommandBatch>>,
}

impl TraceInput {
    pub fn new() -> Self {
        Self::default()
    }

    // The queue is plain data, so a panic on another thread cannot leave it
    // half-updated in a way that matters.
    fn lock(&self) -> MutexGuard<'_, CommandBatch> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue samples for the current trace; consecutive batches coalesce.
    pub fn push_points(&self, points: &[Point]) {
        if points.is_empty() {
            return;
        }
        let mut queue = self.lock();
        match queue.last_mut() {
            Some(Command::AddPoints(batch)) => batch.extend_from_slice(points),
            _ => queue.push(Command::AddPoints(points.to_vec())),
        }
    }

    pub fn push_point(&self, point: Point) {
        self.push_points(&[point]);
    }

    /// Request a fresh trace. Repeated requests with nothing in between
    /// collapse into one.
    pub fn mark_to_reset(&self) {
        let mut queue = self.lock();
        if queue.last() != Some(&Command::Reset) {
            queue.push(Command::Reset);
        }
    }

    pub fn mark_to_complete(&self) {
        let mut queue = self.lock();
        if queue.last() != Some(&Command::Complete) {
            queue.push(Command::Complete);
        }
    }

    /// Swap the pending commands out, leaving the queue empty.
    pub fn take(&self) -> CommandBatch {
        std::mem::take(&mut *self.lock())
    }

    pub fn pending(&self) -> usize {
        self.lock().len()
    }
}

/// Render-side owner of the effect and of the seed used for each new trace.
pub struct TraceSession {
    params: EffectParams,
    seed: u64,
    traces: u64,
    effect: PathLightEffect,
    input: TraceInput,
}

impl TraceSession {
    pub fn new(params: EffectParams, seed: u64) -> Result<Self, ParamsError> {
        params.validate()?;
        let effect = PathLightEffect::new(params.clone(), trace_seed(seed, 0));
        Ok(Self {
            params,
            seed,
            traces: 0,
            effect,
            input: TraceInput::new(),
        })
    }

    /// A producer handle feeding this session.
    pub fn input(&self) -> TraceInput {
        self.input.clone()
    }

    pub fn effect(&self) -> &PathLightEffect {
        &self.effect
    }

    /// Number of resets applied so far.
    pub fn trace_count(&self) -> u64 {
        self.traces
    }

    /// Apply everything queued since the last frame, then advance time.
    pub fn advance(&mut self, now: Duration) {
        for command in self.input.take() {
            self.apply(now, command);
        }
        self.effect.tick(now);
    }

    pub fn apply(&mut self, now: Duration, command: Command) {
        match command {
            Command::AddPoints(points) => self.effect.add_points(now, &points),
            Command::Reset => self.reset(),
            Command::Complete => self.effect.complete(now),
        }
    }

    /// Rebuild every effect around a fresh point storage.
    pub fn reset(&mut self) {
        self.traces += 1;
        self.effect = PathLightEffect::new(self.params.clone(), trace_seed(self.seed, self.traces));
        log::debug!("[trace] reset #{}", self.traces);
    }

    pub fn draw<P: EffectPainter + ?Sized>(&self, painter: &mut P) {
        self.effect.draw(painter);
    }

    /// One full frame: drain input, tick, draw.
    pub fn frame<P: EffectPainter + ?Sized>(&mut self, now: Duration, painter: &mut P) {
        self.advance(now);
        self.draw(painter);
    }
}

// Per-trace seeds derived from the base so each trace can be replayed.
fn trace_seed(seed: u64, trace: u64) -> u64 {
    seed ^ trace.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
