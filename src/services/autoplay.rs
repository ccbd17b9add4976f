//! Repeating timers for carousel autoplay.
//!
//! A [`Scheduler`] hands out [`TimerHandle`]s. The handle is the only control
//! surface: cancel it (or drop it) and the tick stops.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};

/// Callback fired on every timer tick.
pub type TickFn = Arc<dyn Fn() + Send + Sync>;

/// Source of cancellable repeating timers.
pub trait Scheduler: Send + Sync {
    /// Call `tick` every `period`, first one period from now.
    fn schedule_repeating(&self, period: Duration, tick: TickFn) -> TimerHandle;
}

/// Owned handle to a scheduled repeating timer.
///
/// Cancelling is idempotent, and dropping the handle cancels it.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TimerHandle {
    pub fn new<F>(cancel: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_none()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Runs timers as tasks on a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: tokio::runtime::Handle,
}

impl TokioScheduler {
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Scheduler bound to the runtime of the calling task.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn current() -> Self {
        Self::new(tokio::runtime::Handle::current())
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&self, period: Duration, tick: TickFn) -> TimerHandle {
        // `interval_at` panics on a zero period.
        let period = period.max(Duration::from_millis(1));
        let start = Instant::now() + period;
        let task = self.handle.spawn(async move {
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                tick();
            }
        });

        tracing::trace!("Scheduled repeating timer every {:?}", period);
        TimerHandle::new(move || task.abort())
    }
}

struct ManualTimer {
    period: Duration,
    next_due: Duration,
    tick: TickFn,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<u64, ManualTimer>,
}

/// Virtual-clock scheduler driven by explicit [`advance`](Self::advance) calls.
///
/// Timers fire synchronously on the advancing thread, in due-time order.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of timers still scheduled.
    pub fn pending(&self) -> usize {
        self.lock().timers.len()
    }

    /// Move the clock forward by `delta`, firing every tick that falls due.
    ///
    /// # Returns
    /// How many ticks fired
    pub fn advance(&self, delta: Duration) -> usize {
        let target = self.lock().now + delta;
        let mut fired = 0;

        // The lock is released before each tick so callbacks may cancel or
        // schedule timers.
        loop {
            let due = {
                let mut clock = self.lock();
                let next_id = clock
                    .timers
                    .iter()
                    .filter(|(_, timer)| timer.next_due <= target)
                    .min_by_key(|(id, timer)| (timer.next_due, **id))
                    .map(|(id, _)| *id);

                next_id.and_then(|id| {
                    let timer = clock.timers.get_mut(&id)?;
                    let due_at = timer.next_due;
                    timer.next_due += timer.period;
                    let tick = Arc::clone(&timer.tick);
                    clock.now = due_at;
                    Some(tick)
                })
            };

            match due {
                Some(tick) => {
                    tick();
                    fired += 1;
                }
                None => break,
            }
        }

        self.lock().now = target;
        fired
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ManualClock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&self, period: Duration, tick: TickFn) -> TimerHandle {
        // A zero period would never let the clock move past a tick.
        let period = period.max(Duration::from_millis(1));

        let id = {
            let mut clock = self.lock();
            let id = clock.next_id;
            clock.next_id += 1;
            let next_due = clock.now + period;
            clock.timers.insert(
                id,
                ManualTimer {
                    period,
                    next_due,
                    tick,
                },
            );
            id
        };

        let clock = Arc::clone(&self.clock);
        TimerHandle::new(move || {
            clock
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .timers
                .remove(&id);
        })
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &clock.now)
            .field("pending", &clock.timers.len())
            .finish()
    }
}
