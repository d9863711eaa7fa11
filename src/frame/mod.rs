//! Process-wide redraw coordination.
//!
//! Every open surface funnels its "please repaint" signal through one
//! `FrameCoordinator`. Requests are collected into a pending set and a
//! single flush is scheduled per frame interval (33 ms by default), so N
//! terminals cost one scheduled callback per frame and repaint in lockstep.
//!
//! The pending set is the only state here touched from more than one
//! thread. It lives behind one mutex that is held for the brief
//! insert/swap and never across a repaint call.

mod clock;
mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::{DeadlineQueue, FrameScheduler, FrameTask, ThreadScheduler};

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::config::SurfaceConfig;

/// Default flush cadence (~30 Hz).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Something that can repaint itself when a coordinated frame fires.
pub trait RedrawTarget: Send + Sync {
    fn repaint(&self);
}

/// Unique identifier for a surface registered with the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Allocate a fresh process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

struct State {
    pending: HashMap<SurfaceId, Arc<dyn RedrawTarget>>,
    frame_scheduled: bool,
    /// `None` until the first non-empty flush.
    last_flush: Option<Instant>,
}

/// Batches redraw requests from any number of surfaces into periodic flushes.
///
/// Construct one at startup with [`FrameCoordinator::new`] and hand the
/// `Arc` to every surface.
pub struct FrameCoordinator {
    interval: Duration,
    clock: Arc<dyn Clock>,
    scheduler: Arc<dyn FrameScheduler>,
    state: Mutex<State>,
    /// Handle given to scheduled flush tasks.
    this: Weak<Self>,
}

impl FrameCoordinator {
    pub fn new(
        interval: Duration,
        clock: Arc<dyn Clock>,
        scheduler: Arc<dyn FrameScheduler>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            interval,
            clock,
            scheduler,
            state: Mutex::new(State {
                pending: HashMap::new(),
                frame_scheduled: false,
                last_flush: None,
            }),
            this: this.clone(),
        })
    }

    /// Coordinator flushing at the `[render] frame_interval_ms` cadence.
    pub fn from_config(
        config: &SurfaceConfig,
        clock: Arc<dyn Clock>,
        scheduler: Arc<dyn FrameScheduler>,
    ) -> Arc<Self> {
        Self::new(config.frame_interval(), clock, scheduler)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time of the last flush that repainted anything.
    pub fn last_flush(&self) -> Option<Instant> {
        self.state.lock().last_flush
    }

    /// Whether a flush is currently scheduled.
    pub fn is_frame_scheduled(&self) -> bool {
        self.state.lock().frame_scheduled
    }

    pub fn pending_count(&self) -> usize {
        self.state.lock().pending.len()
    }

    pub fn is_pending(&self, id: SurfaceId) -> bool {
        self.state.lock().pending.contains_key(&id)
    }

    /// Ask for `target` to be repainted on the next coordinated frame.
    ///
    /// Idempotent per `id` and non-blocking: the call only records the
    /// request and, if no frame is scheduled yet, schedules one.
    pub fn request_redraw(&self, id: SurfaceId, target: &Arc<dyn RedrawTarget>) {
        let delay = {
            let mut state = self.state.lock();
            state
                .pending
                .entry(id)
                .or_insert_with(|| Arc::clone(target));
            if state.frame_scheduled {
                return;
            }
            state.frame_scheduled = true;
            self.delay_after(state.last_flush)
        };
        self.schedule_flush(delay);
    }

    /// Drop `id` from the pending set, e.g. when its surface is torn down.
    pub fn remove(&self, id: SurfaceId) {
        self.state.lock().pending.remove(&id);
    }

    /// Repaint every pending surface once and return how many were repainted.
    ///
    /// An empty pending set returns 0 without touching the last-flush
    /// time, so a spurious flush does not delay the next real one.
    pub fn flush(&self) -> usize {
        let now = self.clock.now();
        let pending = {
            let mut state = self.state.lock();
            state.frame_scheduled = false;
            if state.pending.is_empty() {
                log::trace!("frame flush: nothing pending");
                return 0;
            }
            state.last_flush = Some(now);
            std::mem::take(&mut state.pending)
        };

        let count = pending.len();
        log::trace!("frame flush: repainting {count} surface(s)");
        for target in pending.into_values() {
            target.repaint();
        }
        count
    }

    /// Delay before the next flush may fire, given the last flush time.
    fn delay_after(&self, last_flush: Option<Instant>) -> Duration {
        let Some(last) = last_flush else {
            return Duration::ZERO;
        };
        let elapsed = self.clock.now().saturating_duration_since(last);
        self.interval.saturating_sub(elapsed)
    }

    fn schedule_flush(&self, delay: Duration) {
        let this = self.this.clone();
        let task: FrameTask = Box::new(move || {
            if let Some(coordinator) = this.upgrade() {
                coordinator.flush();
            }
        });
        if let Err(e) = self.scheduler.schedule(delay, task) {
            // Pending surfaces stay queued for the next successful schedule.
            log::warn!("frame flush not scheduled: {e}");
            self.state.lock().frame_scheduled = false;
        }
    }
}
