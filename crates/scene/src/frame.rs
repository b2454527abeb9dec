use std::time::{Duration, Instant};

/// What a tick callback receives each frame.
///
/// There is no guaranteed fixed delta; controllers use the frame index or
/// elapsed wall-clock rather than a fixed timestep.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub index: u64,
    pub elapsed: Duration,
}

impl Frame {
    /// Elapsed wall-clock in seconds, the `t` of the oscillation formulae.
    pub fn seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

/// Handle returned by `FrameScheduler::start`, used to cancel the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopHandle(usize);

struct LoopSlot {
    tick: Box<dyn FnMut(Frame)>,
    started: Instant,
    frames: u64,
}

/// Cooperative per-frame callback scheduler, driven by the host's
/// display-refresh signal (one `pump` per presented frame).
///
/// One animation loop per mounted 3D section. `cancel` is safe to call
/// repeatedly and guarantees no further tick invocation after it returns:
/// the slot is removed synchronously, so a cancelled loop can never
/// observe a disposed context.
#[derive(Default)]
pub struct FrameScheduler {
    slots: Vec<Option<LoopSlot>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, tick: Box<dyn FnMut(Frame)>) -> LoopHandle {
        let slot = LoopSlot {
            tick,
            started: Instant::now(),
            frames: 0,
        };
        // Reuse a free slot so handles stay small across mount cycles.
        for (i, entry) in self.slots.iter_mut().enumerate() {
            if entry.is_none() {
                *entry = Some(slot);
                return LoopHandle(i);
            }
        }
        self.slots.push(Some(slot));
        LoopHandle(self.slots.len() - 1)
    }

    pub fn cancel(&mut self, handle: LoopHandle) {
        if let Some(entry) = self.slots.get_mut(handle.0) {
            if entry.take().is_some() {
                tracing::debug!(slot = handle.0, "animation loop cancelled");
            }
        }
    }

    /// Invoke every live callback once.
    pub fn pump(&mut self, now: Instant) {
        for entry in self.slots.iter_mut() {
            if let Some(slot) = entry {
                let frame = Frame {
                    index: slot.frames,
                    elapsed: now.saturating_duration_since(slot.started),
                };
                slot.frames += 1;
                (slot.tick)(frame);
            }
        }
    }

    /// Number of loops currently scheduled.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Rolling frame-time statistics for instrumentation.
#[derive(Debug)]
pub struct FrameTimer {
    history: Vec<Duration>,
    capacity: usize,
    index: usize,
    filled: bool,
}

impl FrameTimer {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: vec![Duration::ZERO; capacity],
            capacity,
            index: 0,
            filled: false,
        }
    }

    pub fn record(&mut self, dt: Duration) {
        self.history[self.index] = dt;
        self.index = (self.index + 1) % self.capacity;
        if self.index == 0 {
            self.filled = true;
        }
    }

    pub fn average(&self) -> Duration {
        let count = self.count();
        if count == 0 {
            return Duration::ZERO;
        }
        let total: Duration = self.history[..count].iter().sum();
        total / count as u32
    }

    pub fn max(&self) -> Duration {
        self.history[..self.count()]
            .iter()
            .copied()
            .max()
            .unwrap_or(Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.history[..self.count()]
            .iter()
            .copied()
            .min()
            .unwrap_or(Duration::ZERO)
    }

    pub fn count(&self) -> usize {
        if self.filled { self.capacity } else { self.index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn pump_invokes_each_live_loop_once() {
        let mut sched = FrameScheduler::new();
        let count = Rc::new(Cell::new(0u32));

        let c = count.clone();
        sched.start(Box::new(move |_| c.set(c.get() + 1)));

        sched.pump(Instant::now());
        sched.pump(Instant::now());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn cancel_stops_ticks_immediately() {
        let mut sched = FrameScheduler::new();
        let count = Rc::new(Cell::new(0u32));

        let c = count.clone();
        let handle = sched.start(Box::new(move |_| c.set(c.get() + 1)));

        sched.pump(Instant::now());
        sched.cancel(handle);
        sched.pump(Instant::now());
        sched.pump(Instant::now());
        assert_eq!(count.get(), 1, "no tick may fire after cancel returns");
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut sched = FrameScheduler::new();
        let handle = sched.start(Box::new(|_| {}));
        sched.cancel(handle);
        sched.cancel(handle);
        sched.cancel(handle);
        assert_eq!(sched.active_count(), 0);
    }

    #[test]
    fn frame_index_increments_per_loop() {
        let mut sched = FrameScheduler::new();
        let last = Rc::new(Cell::new(0u64));

        let l = last.clone();
        sched.start(Box::new(move |f| l.set(f.index)));

        for _ in 0..5 {
            sched.pump(Instant::now());
        }
        assert_eq!(last.get(), 4);
    }

    #[test]
    fn slots_are_reused_after_cancel() {
        let mut sched = FrameScheduler::new();
        let a = sched.start(Box::new(|_| {}));
        sched.cancel(a);
        let b = sched.start(Box::new(|_| {}));
        assert_eq!(a, b);
        assert_eq!(sched.active_count(), 1);
    }

    #[test]
    fn independent_loops_do_not_interfere() {
        let mut sched = FrameScheduler::new();
        let a = Rc::new(Cell::new(0u32));
        let b = Rc::new(Cell::new(0u32));

        let ca = a.clone();
        let ha = sched.start(Box::new(move |_| ca.set(ca.get() + 1)));
        let cb = b.clone();
        sched.start(Box::new(move |_| cb.set(cb.get() + 1)));

        sched.pump(Instant::now());
        sched.cancel(ha);
        sched.pump(Instant::now());

        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
    }

    #[test]
    fn frame_timer_tracks_history() {
        let mut timer = FrameTimer::new(3);
        timer.record(Duration::from_millis(10));
        timer.record(Duration::from_millis(20));
        timer.record(Duration::from_millis(30));

        assert_eq!(timer.count(), 3);
        assert_eq!(timer.average(), Duration::from_millis(20));
        assert_eq!(timer.max(), Duration::from_millis(30));
    }

    #[test]
    fn frame_timer_wraps_around() {
        let mut timer = FrameTimer::new(2);
        timer.record(Duration::from_millis(10));
        timer.record(Duration::from_millis(20));
        timer.record(Duration::from_millis(30));

        assert_eq!(timer.count(), 2);
        assert_eq!(timer.average(), Duration::from_millis(25));
    }
}
